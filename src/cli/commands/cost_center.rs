use crate::cli::parser::{Commands, CostCenterAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{companies, cost_centers, notifications};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::CostCenter { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            CostCenterAction::Add { company_id, name } => {
                // Fail early with a precise message if the company is missing.
                companies::get_company(&pool.conn, *company_id)?;

                let id = cost_centers::insert_cost_center(&pool.conn, *company_id, name)?;
                notifications::notify(&pool.conn, "cost_center_add", name, "Cost center created")?;
                success(format!("Cost center '{}' created (id {}).", name, id));
            }

            CostCenterAction::List { company_id } => {
                let list = cost_centers::list_cost_centers(&pool.conn, *company_id)?;
                if list.is_empty() {
                    warning("No cost centers found.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "Company", "Name"]);
                for cc in &list {
                    table.add_row(vec![
                        cc.id.to_string(),
                        cc.company_id.to_string(),
                        cc.name.clone(),
                    ]);
                }
                print!("{}", table.render());
            }

            CostCenterAction::Del { id } => {
                let n = cost_centers::delete_cost_center(&pool.conn, *id)?;
                if n == 0 {
                    return Err(AppError::NotFound {
                        entity: "cost center",
                        key: id.to_string(),
                    });
                }
                notifications::notify(
                    &pool.conn,
                    "cost_center_del",
                    &id.to_string(),
                    "Cost center deleted",
                )?;
                success(format!("Cost center {} deleted.", id));
            }
        }
    }
    Ok(())
}
