use crate::cli::parser::{Commands, CompanyAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{companies, notifications};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            CompanyAction::Add { name, cnpj } => {
                let id = companies::insert_company(&pool.conn, name, cnpj.as_deref())?;
                notifications::notify(&pool.conn, "company_add", name, "Company created")?;
                success(format!("Company '{}' created (id {}).", name, id));
            }

            CompanyAction::List => {
                let list = companies::list_companies(&pool.conn)?;
                if list.is_empty() {
                    warning("No companies registered.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "Name", "CNPJ"]);
                for c in &list {
                    table.add_row(vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.cnpj.clone().unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                print!("{}", table.render());
            }

            CompanyAction::Set { id, name, cnpj } => {
                companies::update_company(&pool.conn, *id, name.as_deref(), cnpj.as_deref())?;
                notifications::notify(
                    &pool.conn,
                    "company_edit",
                    &id.to_string(),
                    "Company updated",
                )?;
                success(format!("Company {} updated.", id));
            }

            CompanyAction::Del { id } => {
                let n = companies::delete_company(&pool.conn, *id)?;
                if n == 0 {
                    return Err(AppError::NotFound {
                        entity: "company",
                        key: id.to_string(),
                    });
                }
                notifications::notify(
                    &pool.conn,
                    "company_del",
                    &id.to_string(),
                    "Company deleted",
                )?;
                success(format!("Company {} deleted.", id));
            }
        }
    }
    Ok(())
}
