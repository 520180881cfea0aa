use crate::errors::AppResult;
use crate::models::notification::Notification;
use chrono::Utc;
use rusqlite::{Connection, Result, Row, params};

/// Write one row into the `notificacoes` table.
/// Used both for user-visible notifications and for the internal
/// operation audit trail.
pub fn notify(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Utc::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO notificacoes (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn map_row(row: &Row) -> Result<Notification> {
    Ok(Notification {
        id: row.get("id")?,
        date: row.get("date")?,
        operation: row.get("operation")?,
        target: row.get("target")?,
        message: row.get("message")?,
        read: row.get::<_, i64>("read")? == 1,
    })
}

pub fn list_notifications(conn: &Connection, unread_only: bool) -> AppResult<Vec<Notification>> {
    let sql = if unread_only {
        "SELECT * FROM notificacoes WHERE read = 0 ORDER BY id ASC"
    } else {
        "SELECT * FROM notificacoes ORDER BY id ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_all_read(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("UPDATE notificacoes SET read = 1 WHERE read = 0", [])?;
    Ok(n)
}
