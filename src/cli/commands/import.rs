use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::db::notifications;
use crate::errors::{AppError, AppResult};
use crate::export::template::write_template;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        report,
        csv,
        template,
    } = cmd
    {
        if let Some(file) = template {
            write_template(&expand_tilde(file))?;
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        let outcome = if let Some(file) = report {
            let text = fs::read_to_string(expand_tilde(file))?;
            ImportLogic::import_report(&mut pool, &text, "import")?
        } else if let Some(file) = csv {
            let text = fs::read_to_string(expand_tilde(file))?;
            ImportLogic::import_csv(&mut pool, &text, "csv")?
        } else {
            return Err(AppError::Import(
                "Nothing to do: specify --report, --csv or --template.".to_string(),
            ));
        };

        notifications::notify(
            &pool.conn,
            "import",
            "",
            &format!("Imported {} punch record(s)", outcome.inserted),
        )?;

        if let Some(base) = outcome.date_base {
            success(format!(
                "Imported {} punch record(s) (date base {}).",
                outcome.inserted,
                base.format("%Y-%m-%d")
            ));
        } else {
            success(format!("Imported {} punch record(s).", outcome.inserted));
        }

        if !outcome.skipped_lines.is_empty() {
            warning(format!(
                "{} marking line(s) skipped (no employee context), see notifications.",
                outcome.skipped_lines.len()
            ));
        }
    }
    Ok(())
}
