use crate::errors::AppResult;
use crate::models::parameter::Parameter;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Parameter> {
    Ok(Parameter {
        id: row.get("id")?,
        key: row.get("key")?,
        value: row.get("value")?,
    })
}

pub fn set_param(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO parametros (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_param(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM parametros WHERE key = ?1")?;
    Ok(stmt.query_row([key], |row| row.get(0)).optional()?)
}

pub fn list_params(conn: &Connection) -> AppResult<Vec<Parameter>> {
    let mut stmt = conn.prepare("SELECT * FROM parametros ORDER BY key ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
