//! Punch import pipeline: parse → resolve references → bulk insert.
//!
//! Every textual reference (matricula, location label) is resolved to a
//! database id *before* the batch is built; an unresolvable reference
//! fails the import with a per-row error. The batch is inserted in one
//! transaction: any failure aborts the whole import.

use crate::core::report::{self, PunchDraft};
use crate::core::timefix;
use crate::db::pool::DbPool;
use crate::db::{cost_centers, employees, notifications, punches};
use crate::errors::{AppError, AppResult};
use crate::models::punch::{PunchRecord, SLOT_COUNT};
use crate::utils::date;
use chrono::{DateTime, NaiveDate, Utc};

pub struct ImportOutcome {
    pub inserted: usize,
    pub date_base: Option<NaiveDate>,
    pub skipped_lines: Vec<usize>,
}

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Import a plain-text punch report.
    pub fn import_report(pool: &mut DbPool, text: &str, source: &str) -> AppResult<ImportOutcome> {
        let parsed = report::parse_report(text, date::today());

        for line in &parsed.skipped_lines {
            notifications::notify(
                &pool.conn,
                "import_warning",
                "",
                &format!(
                    "Report line {}: marking line before any 'Empregado:' (skipped)",
                    line
                ),
            )?;
        }

        let inserted = insert_drafts(pool, &parsed.drafts, source)?;

        Ok(ImportOutcome {
            inserted,
            date_base: Some(parsed.date_base),
            skipped_lines: parsed.skipped_lines,
        })
    }

    /// Import the manual-entry CSV format
    /// (`Matricula,Data,Entrada1,Saida1,...,Entrada4,Saida4`).
    pub fn import_csv(pool: &mut DbPool, text: &str, source: &str) -> AppResult<ImportOutcome> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut drafts = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| AppError::Import(format!("CSV row {}: {}", idx + 1, e)))?;

            if record.iter().all(|f| f.is_empty()) {
                continue;
            }

            let matricula = record
                .get(0)
                .filter(|m| !m.is_empty())
                .ok_or_else(|| AppError::Import(format!("CSV row {}: missing matricula", idx + 1)))?
                .to_string();

            let date_raw = record
                .get(1)
                .filter(|d| !d.is_empty())
                .ok_or_else(|| AppError::Import(format!("CSV row {}: missing date", idx + 1)))?;
            let row_date = date::parse_date(date_raw)
                .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

            let mut times = [None; SLOT_COUNT];
            for (slot, t) in times.iter_mut().enumerate() {
                if let Some(raw) = record.get(slot + 2).filter(|v| !v.is_empty()) {
                    *t = Some(
                        crate::utils::time::parse_time(raw)
                            .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?,
                    );
                }
            }

            drafts.push(PunchDraft {
                matricula,
                employee_name: String::new(),
                location: None,
                date: row_date,
                times,
                line: idx + 2, // header is line 1
            });
        }

        let inserted = insert_drafts(pool, &drafts, source)?;

        Ok(ImportOutcome {
            inserted,
            date_base: None,
            skipped_lines: Vec::new(),
        })
    }
}

/// Resolve each draft's references and insert the whole batch.
fn insert_drafts(pool: &mut DbPool, drafts: &[PunchDraft], source: &str) -> AppResult<usize> {
    if drafts.is_empty() {
        return Err(AppError::NoRecordsFound);
    }

    let mut records = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let employee = employees::find_by_matricula(&pool.conn, &draft.matricula)?.ok_or(
            AppError::UnknownEmployee {
                row: draft.line,
                matricula: draft.matricula.clone(),
            },
        )?;

        // Location label resolves within the employee's company; a report
        // without a location falls back to the employee's own cost center.
        let cost_center_id = match &draft.location {
            Some(label) => {
                cost_centers::find_by_label(&pool.conn, employee.company_id, label)?
                    .ok_or(AppError::UnknownCostCenter {
                        row: draft.line,
                        label: label.clone(),
                        company_id: employee.company_id,
                    })?
                    .id
            }
            None => employee.cost_center_id,
        };

        let slots: [Option<DateTime<Utc>>; SLOT_COUNT] = draft
            .times
            .map(|t| t.map(|t| timefix::store_timestamp(draft.date, t)));

        records.push(PunchRecord::new(
            employee.id,
            cost_center_id,
            draft.date,
            slots,
            source,
        ));
    }

    punches::bulk_insert(&mut pool.conn, &records)
}
