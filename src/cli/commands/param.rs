use crate::cli::parser::{Commands, ParamAction};
use crate::config::Config;
use crate::db::parameters;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Param { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ParamAction::Set { key, value } => {
                parameters::set_param(&pool.conn, key, value)?;
                success(format!("Parameter '{}' set.", key));
            }

            ParamAction::List => {
                let list = parameters::list_params(&pool.conn)?;
                if list.is_empty() {
                    warning("No parameters set.");
                    return Ok(());
                }
                for p in &list {
                    println!("{} = {}", p.key, p.value);
                }
            }
        }
    }
    Ok(())
}
