use serde::Serialize;

/// An employee (`funcionarios` collection).
/// `matricula` is the external registration code used as the natural key
/// when importing punch reports.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub company_id: i64,
    pub cost_center_id: i64,
    pub shift_id: Option<i64>,
    pub matricula: String,
    pub name: String,
    pub created_at: String, // ISO8601
}
