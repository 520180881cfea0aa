use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{notifications, shifts};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ShiftAction::Add {
                name,
                company_id,
                cost_center_id,
                clock_in,
                clock_out,
            } => {
                let clock_in = parse_optional_time(clock_in.as_ref())?;
                let clock_out = parse_optional_time(clock_out.as_ref())?;

                let id = shifts::insert_shift(
                    &pool.conn,
                    *company_id,
                    *cost_center_id,
                    name,
                    clock_in,
                    clock_out,
                )?;
                notifications::notify(&pool.conn, "shift_add", name, "Shift created")?;
                success(format!("Shift '{}' created (id {}).", name, id));
            }

            ShiftAction::List => {
                let list = shifts::list_shifts(&pool.conn)?;
                if list.is_empty() {
                    warning("No shifts found.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "Name", "Window", "Company", "Cost center"]);
                for s in &list {
                    table.add_row(vec![
                        s.id.to_string(),
                        s.name.clone(),
                        s.window_str(),
                        s.company_id.map_or("-".to_string(), |v| v.to_string()),
                        s.cost_center_id.map_or("-".to_string(), |v| v.to_string()),
                    ]);
                }
                print!("{}", table.render());
            }

            ShiftAction::Del { id } => {
                let n = shifts::delete_shift(&pool.conn, *id)?;
                if n == 0 {
                    return Err(AppError::NotFound {
                        entity: "shift",
                        key: id.to_string(),
                    });
                }
                notifications::notify(&pool.conn, "shift_del", &id.to_string(), "Shift deleted")?;
                success(format!("Shift {} deleted.", id));
            }
        }
    }
    Ok(())
}
