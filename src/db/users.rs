use crate::db::constraint_to_duplicate;
use crate::errors::AppResult;
use crate::models::user::{Session, User};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        name: row.get("name")?,
        password_hash: row.get("password_hash")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(
    conn: &Connection,
    email: &str,
    name: &str,
    password_hash: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO usuarios (email, name, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, name, password_hash, Utc::now().to_rfc3339()],
    )
    .map_err(|e| constraint_to_duplicate(e, &format!("user '{}'", email)))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM usuarios WHERE email = ?1")?;
    Ok(stmt.query_row([email], map_row).optional()?)
}

pub fn create_session(conn: &Connection, token: &str, user_id: i64) -> AppResult<Session> {
    let created_at = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO sessoes (token, user_id, created_at) VALUES (?1, ?2, ?3)",
        params![token, user_id, created_at],
    )?;
    Ok(Session {
        token: token.to_string(),
        user_id,
        created_at,
    })
}

pub fn delete_session(conn: &Connection, token: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM sessoes WHERE token = ?1", [token])?;
    Ok(n)
}

/// Session retrieval: token → (session, owning user).
pub fn find_session(conn: &Connection, token: &str) -> AppResult<Option<(Session, User)>> {
    let mut stmt = conn.prepare(
        "SELECT s.token, s.user_id, s.created_at,
                u.id, u.email, u.name, u.password_hash, u.created_at AS user_created_at
         FROM sessoes s JOIN usuarios u ON u.id = s.user_id
         WHERE s.token = ?1",
    )?;

    let found = stmt
        .query_row([token], |row| {
            Ok((
                Session {
                    token: row.get(0)?,
                    user_id: row.get(1)?,
                    created_at: row.get(2)?,
                },
                User {
                    id: row.get(3)?,
                    email: row.get(4)?,
                    name: row.get(5)?,
                    password_hash: row.get(6)?,
                    created_at: row.get(7)?,
                },
            ))
        })
        .optional()?;

    Ok(found)
}
