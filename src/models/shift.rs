use chrono::NaiveTime;
use serde::Serialize;

/// A work shift (`turnos` collection). Parent company/cost-center are
/// optional: a shift without them applies across the whole account.
#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub id: i64,
    pub company_id: Option<i64>,
    pub cost_center_id: Option<i64>,
    pub name: String,
    pub clock_in: Option<NaiveTime>,  // ⇔ turnos.clock_in (TEXT "HH:MM")
    pub clock_out: Option<NaiveTime>, // ⇔ turnos.clock_out (TEXT "HH:MM")
}

impl Shift {
    pub fn window_str(&self) -> String {
        match (self.clock_in, self.clock_out) {
            (Some(i), Some(o)) => format!("{} - {}", i.format("%H:%M"), o.format("%H:%M")),
            (Some(i), None) => format!("{} -", i.format("%H:%M")),
            (None, Some(o)) => format!("- {}", o.format("%H:%M")),
            (None, None) => "-".to_string(),
        }
    }
}
