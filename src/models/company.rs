use serde::Serialize;

/// A company (`empresas` collection). Root of the organizational tree.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub cnpj: Option<String>,
    pub created_at: String, // ISO8601
}
