use crate::db::constraint_to_duplicate;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        cost_center_id: row.get("cost_center_id")?,
        shift_id: row.get("shift_id")?,
        matricula: row.get("matricula")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn insert_employee(
    conn: &Connection,
    company_id: i64,
    cost_center_id: i64,
    shift_id: Option<i64>,
    matricula: &str,
    name: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO funcionarios (company_id, cost_center_id, shift_id, matricula, name, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            company_id,
            cost_center_id,
            shift_id,
            matricula,
            name,
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| constraint_to_duplicate(e, &format!("employee matricula '{}'", matricula)))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM funcionarios ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Employee> {
    let mut stmt = conn.prepare("SELECT * FROM funcionarios WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "employee",
            key: id.to_string(),
        })
}

/// Natural-key lookup used by punch imports.
pub fn find_by_matricula(conn: &Connection, matricula: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM funcionarios WHERE matricula = ?1")?;
    Ok(stmt.query_row([matricula], map_row).optional()?)
}

pub fn update_employee(
    conn: &Connection,
    id: i64,
    cost_center_id: Option<i64>,
    shift_id: Option<i64>,
    name: Option<&str>,
) -> AppResult<()> {
    let current = get_employee(conn, id)?;
    conn.execute(
        "UPDATE funcionarios SET cost_center_id = ?1, shift_id = ?2, name = ?3 WHERE id = ?4",
        params![
            cost_center_id.unwrap_or(current.cost_center_id),
            shift_id.or(current.shift_id),
            name.unwrap_or(&current.name),
            id,
        ],
    )?;
    Ok(())
}

pub fn delete_employee(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM funcionarios WHERE id = ?1", [id])?;
    Ok(n)
}
