use serde::Serialize;

/// A cost center (`centro_custos` collection), child of a company.
/// Punch imports resolve the report's free-text location label against
/// the cost-center names of the employee's company.
#[derive(Debug, Clone, Serialize)]
pub struct CostCenter {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
}
