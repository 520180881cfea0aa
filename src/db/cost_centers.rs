use crate::db::constraint_to_duplicate;
use crate::errors::{AppError, AppResult};
use crate::models::cost_center::CostCenter;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<CostCenter> {
    Ok(CostCenter {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        name: row.get("name")?,
    })
}

pub fn insert_cost_center(conn: &Connection, company_id: i64, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO centro_custos (company_id, name) VALUES (?1, ?2)",
        params![company_id, name],
    )
    .map_err(|e| constraint_to_duplicate(e, &format!("cost center '{}'", name)))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_cost_centers(conn: &Connection, company_id: Option<i64>) -> AppResult<Vec<CostCenter>> {
    let mut out = Vec::new();

    match company_id {
        Some(cid) => {
            let mut stmt = conn.prepare(
                "SELECT * FROM centro_custos WHERE company_id = ?1 ORDER BY name ASC",
            )?;
            let rows = stmt.query_map([cid], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM centro_custos ORDER BY name ASC")?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn get_cost_center(conn: &Connection, id: i64) -> AppResult<CostCenter> {
    let mut stmt = conn.prepare("SELECT * FROM centro_custos WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "cost center",
            key: id.to_string(),
        })
}

/// Resolve a report location label against a company's cost centers.
/// Labels come from free text, so the match ignores case and padding.
pub fn find_by_label(
    conn: &Connection,
    company_id: i64,
    label: &str,
) -> AppResult<Option<CostCenter>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM centro_custos
         WHERE company_id = ?1 AND LOWER(TRIM(name)) = LOWER(TRIM(?2))",
    )?;
    Ok(stmt.query_row(params![company_id, label], map_row).optional()?)
}

pub fn delete_cost_center(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM centro_custos WHERE id = ?1", [id])?;
    Ok(n)
}
