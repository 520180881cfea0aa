use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::filters::{self, FilterData};
use crate::db::pool::DbPool;
use crate::db::{companies, cost_centers, employees, notifications, shifts};
use crate::errors::{AppError, AppResult};
use crate::storage::photos::PhotoStore;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                matricula,
                name,
                company_id,
                cost_center_id,
                shift_id,
            } => {
                companies::get_company(&pool.conn, *company_id)?;
                let cc = cost_centers::get_cost_center(&pool.conn, *cost_center_id)?;
                if cc.company_id != *company_id {
                    return Err(AppError::InvalidFilter(format!(
                        "cost center {} belongs to company {}, not {}",
                        cc.id, cc.company_id, company_id
                    )));
                }
                if let Some(sid) = shift_id {
                    shifts::get_shift(&pool.conn, *sid)?;
                }

                let id = employees::insert_employee(
                    &pool.conn,
                    *company_id,
                    *cost_center_id,
                    *shift_id,
                    matricula,
                    name,
                )?;
                notifications::notify(&pool.conn, "employee_add", matricula, "Employee created")?;
                success(format!(
                    "Employee '{}' (matricula {}) created (id {}).",
                    name, matricula, id
                ));
            }

            EmployeeAction::List {
                company,
                cost_center,
                shift,
            } => {
                let all_companies = companies::list_companies(&pool.conn)?;
                let all_cost_centers = cost_centers::list_cost_centers(&pool.conn, None)?;
                let all_shifts = shifts::list_shifts(&pool.conn)?;
                let all_employees = employees::list_employees(&pool.conn)?;

                let data = FilterData {
                    companies: &all_companies,
                    cost_centers: &all_cost_centers,
                    shifts: &all_shifts,
                    employees: &all_employees,
                };

                let state =
                    filters::build_state(&data, *company, *cost_center, *shift, None)
                        .map_err(AppError::InvalidFilter)?;
                let options = filters::resolve(&data, &state);

                if options.employees.is_empty() {
                    warning("No employees found for this selection.");
                    return Ok(());
                }

                let mut table =
                    Table::new(&["ID", "Matricula", "Name", "Company", "Cost center", "Shift"]);
                for e in &options.employees {
                    table.add_row(vec![
                        e.id.to_string(),
                        e.matricula.clone(),
                        e.name.clone(),
                        e.company_id.to_string(),
                        e.cost_center_id.to_string(),
                        e.shift_id.map_or("-".to_string(), |v| v.to_string()),
                    ]);
                }
                print!("{}", table.render());
            }

            EmployeeAction::Set {
                id,
                name,
                cost_center_id,
                shift_id,
            } => {
                employees::update_employee(
                    &pool.conn,
                    *id,
                    *cost_center_id,
                    *shift_id,
                    name.as_deref(),
                )?;
                notifications::notify(
                    &pool.conn,
                    "employee_edit",
                    &id.to_string(),
                    "Employee updated",
                )?;
                success(format!("Employee {} updated.", id));
            }

            EmployeeAction::Del { id } => {
                let n = employees::delete_employee(&pool.conn, *id)?;
                if n == 0 {
                    return Err(AppError::NotFound {
                        entity: "employee",
                        key: id.to_string(),
                    });
                }
                notifications::notify(
                    &pool.conn,
                    "employee_del",
                    &id.to_string(),
                    "Employee deleted",
                )?;
                success(format!("Employee {} deleted.", id));
            }

            EmployeeAction::Photo {
                matricula,
                file,
                check,
                path,
            } => {
                // The store is keyed by matricula, so the employee must exist.
                employees::find_by_matricula(&pool.conn, matricula)?.ok_or(
                    AppError::NotFound {
                        entity: "employee",
                        key: matricula.clone(),
                    },
                )?;

                let store = PhotoStore::new(&cfg.photos_dir);

                if let Some(file) = file {
                    let dest = store.upload(matricula, &expand_tilde(file))?;
                    notifications::notify(
                        &pool.conn,
                        "photo_upload",
                        matricula,
                        "Photo uploaded",
                    )?;
                    success(format!("Photo stored at {}", dest.display()));
                } else if *check {
                    if store.exists(matricula) {
                        println!("Photo stored for matricula {matricula}");
                    } else {
                        println!("No photo stored for matricula {matricula}");
                    }
                } else if *path {
                    println!("{}", store.path(matricula)?.display());
                } else {
                    warning("Nothing to do: specify --file, --check or --path.");
                }
            }
        }
    }
    Ok(())
}
