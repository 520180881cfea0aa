use crate::errors::{AppError, AppResult};
use crate::models::punch::{PunchRecord, SLOT_COUNT};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<PunchRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let mut slots: [Option<DateTime<Utc>>; SLOT_COUNT] = [None; SLOT_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        let col = format!("b{}", i + 1);
        let raw: Option<String> = row.get(col.as_str())?;
        if let Some(raw) = raw {
            let ts = DateTime::parse_from_rfc3339(&raw).map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTime(raw.clone())),
                )
            })?;
            *slot = Some(ts.with_timezone(&Utc));
        }
    }

    Ok(PunchRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        cost_center_id: row.get("cost_center_id")?,
        date,
        slots,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn slot_params(rec: &PunchRecord) -> Vec<Option<String>> {
    rec.slots
        .iter()
        .map(|s| s.map(|ts| ts.to_rfc3339()))
        .collect()
}

pub fn insert_punch(conn: &Connection, rec: &PunchRecord) -> AppResult<i64> {
    let s = slot_params(rec);
    conn.execute(
        "INSERT INTO batidas_ponto
         (employee_id, cost_center_id, date, b1, b2, b3, b4, b5, b6, b7, b8, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            rec.employee_id,
            rec.cost_center_id,
            rec.date_str(),
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
            rec.source,
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a whole import batch inside one transaction.
/// Any failing row rolls back the entire batch; there is no
/// partial-success reporting.
pub fn bulk_insert(conn: &mut Connection, records: &[PunchRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    for rec in records {
        insert_punch(&tx, rec)?;
    }
    tx.commit()?;
    Ok(records.len())
}

/// Load punch records, optionally bounded by date and restricted to a set
/// of employees (the output of the cascading filter resolver).
pub fn list_punches(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
    employee_ids: Option<&[i64]>,
) -> AppResult<Vec<PunchRecord>> {
    let mut sql = String::from("SELECT * FROM batidas_ponto WHERE 1=1");
    let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some((start, end)) = bounds {
        sql.push_str(&format!(
            " AND date BETWEEN ?{} AND ?{}",
            args.len() + 1,
            args.len() + 2
        ));
        args.push(Box::new(start.format("%Y-%m-%d").to_string()));
        args.push(Box::new(end.format("%Y-%m-%d").to_string()));
    }

    if let Some(ids) = employee_ids {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders: Vec<String> = ids
            .iter()
            .enumerate()
            .map(|(i, _)| format!("?{}", args.len() + i + 1))
            .collect();
        sql.push_str(&format!(
            " AND employee_id IN ({})",
            placeholders.join(",")
        ));
        for id in ids {
            args.push(Box::new(*id));
        }
    }

    sql.push_str(" ORDER BY date ASC, employee_id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM batidas_ponto WHERE id = ?1", [id])?;
    Ok(n)
}
