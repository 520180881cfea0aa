use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Shift> {
    let clock_in: Option<String> = row.get("clock_in")?;
    let clock_out: Option<String> = row.get("clock_out")?;

    Ok(Shift {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        cost_center_id: row.get("cost_center_id")?,
        name: row.get("name")?,
        clock_in: clock_in.as_deref().and_then(parse_hhmm),
        clock_out: clock_out.as_deref().and_then(parse_hhmm),
    })
}

fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

pub fn insert_shift(
    conn: &Connection,
    company_id: Option<i64>,
    cost_center_id: Option<i64>,
    name: &str,
    clock_in: Option<NaiveTime>,
    clock_out: Option<NaiveTime>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO turnos (company_id, cost_center_id, name, clock_in, clock_out)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            company_id,
            cost_center_id,
            name,
            clock_in.map(|t| t.format("%H:%M").to_string()),
            clock_out.map(|t| t.format("%H:%M").to_string()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_shifts(conn: &Connection) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare("SELECT * FROM turnos ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_shift(conn: &Connection, id: i64) -> AppResult<Shift> {
    let mut stmt = conn.prepare("SELECT * FROM turnos WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "shift",
            key: id.to_string(),
        })
}

pub fn delete_shift(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM turnos WHERE id = ?1", [id])?;
    Ok(n)
}
