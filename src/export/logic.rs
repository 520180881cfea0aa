use crate::core::timefix;
use crate::db::pool::DbPool;
use crate::db::{employees, cost_centers, punches};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::PunchExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export punch records.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or `YYYY[-MM[-DD]]` / `start:end`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, date_bounds)?;

        if rows.is_empty() {
            warning("No punch records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Load punch rows joined with employee and cost-center names, rendered
/// through the display formatter.
fn load_rows(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<PunchExport>> {
    let offset = timefix::display_offset(&pool.conn)?;

    let by_employee: HashMap<i64, (String, String)> = employees::list_employees(&pool.conn)?
        .into_iter()
        .map(|e| (e.id, (e.matricula, e.name)))
        .collect();

    let by_cost_center: HashMap<i64, String> = cost_centers::list_cost_centers(&pool.conn, None)?
        .into_iter()
        .map(|cc| (cc.id, cc.name))
        .collect();

    let records = punches::list_punches(&pool.conn, bounds, None)?;

    let mut rows = Vec::with_capacity(records.len());
    for rec in records {
        let (matricula, employee) = by_employee
            .get(&rec.employee_id)
            .cloned()
            .unwrap_or_else(|| (String::new(), String::new()));

        let display: Vec<Option<String>> = rec
            .slots
            .iter()
            .map(|s| s.map(|ts| timefix::display_time(ts, offset)))
            .collect();

        rows.push(PunchExport {
            id: rec.id,
            matricula,
            employee,
            cost_center: by_cost_center
                .get(&rec.cost_center_id)
                .cloned()
                .unwrap_or_default(),
            date: rec.date_str(),
            b1: display[0].clone(),
            b2: display[1].clone(),
            b3: display[2].clone(),
            b4: display[3].clone(),
            b5: display[4].clone(),
            b6: display[5].clone(),
            b7: display[6].clone(),
            b8: display[7].clone(),
            source: rec.source,
        });
    }

    Ok(rows)
}
