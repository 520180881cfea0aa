use crate::db::constraint_to_duplicate;
use crate::errors::{AppError, AppResult};
use crate::models::company::Company;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Company> {
    Ok(Company {
        id: row.get("id")?,
        name: row.get("name")?,
        cnpj: row.get("cnpj")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_company(conn: &Connection, name: &str, cnpj: Option<&str>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO empresas (name, cnpj, created_at) VALUES (?1, ?2, ?3)",
        params![name, cnpj, Utc::now().to_rfc3339()],
    )
    .map_err(|e| constraint_to_duplicate(e, &format!("company '{}'", name)))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_companies(conn: &Connection) -> AppResult<Vec<Company>> {
    let mut stmt = conn.prepare("SELECT * FROM empresas ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_company(conn: &Connection, id: i64) -> AppResult<Company> {
    let mut stmt = conn.prepare("SELECT * FROM empresas WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "company",
            key: id.to_string(),
        })
}

pub fn update_company(
    conn: &Connection,
    id: i64,
    name: Option<&str>,
    cnpj: Option<&str>,
) -> AppResult<()> {
    // Unconditional last-write-wins, no version checks.
    let current = get_company(conn, id)?;
    conn.execute(
        "UPDATE empresas SET name = ?1, cnpj = ?2 WHERE id = ?3",
        params![
            name.unwrap_or(&current.name),
            cnpj.or(current.cnpj.as_deref()),
            id
        ],
    )
    .map_err(|e| constraint_to_duplicate(e, &format!("company '{}'", name.unwrap_or(""))))?;
    Ok(())
}

pub fn delete_company(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM empresas WHERE id = ?1", [id])?;
    Ok(n)
}
