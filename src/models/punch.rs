use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Number of punch slots per employee per day (B1..B8).
pub const SLOT_COUNT: usize = 8;

/// One punch record (`batidas_ponto` collection): one row per
/// (employee, day), with up to eight ordered timestamp slots.
///
/// Slots are filled left-to-right: a later slot is non-null only if all
/// earlier slots are non-null.
#[derive(Debug, Clone, Serialize)]
pub struct PunchRecord {
    pub id: i64,
    pub employee_id: i64,
    pub cost_center_id: i64,
    pub date: NaiveDate,                          // ⇔ batidas_ponto.date (TEXT "YYYY-MM-DD")
    pub slots: [Option<DateTime<Utc>>; SLOT_COUNT], // ⇔ b1..b8 (TEXT RFC3339)
    pub source: String,                           // 'import' | 'csv' | 'cli'
    pub created_at: String,                       // ISO8601
}

impl PunchRecord {
    pub fn new(
        employee_id: i64,
        cost_center_id: i64,
        date: NaiveDate,
        slots: [Option<DateTime<Utc>>; SLOT_COUNT],
        source: &str,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            cost_center_id,
            date,
            slots: compact_slots(slots),
            source: source.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Number of filled slots.
    pub fn punch_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Shift filled slots left so no null precedes a non-null value.
pub fn compact_slots(
    slots: [Option<DateTime<Utc>>; SLOT_COUNT],
) -> [Option<DateTime<Utc>>; SLOT_COUNT] {
    let mut out = [None; SLOT_COUNT];
    let mut i = 0;
    for s in slots.into_iter().flatten() {
        out[i] = Some(s);
        i += 1;
    }
    out
}
