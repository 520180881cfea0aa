use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::notifications;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use ansi_term::Colour;

/// Color per operation family in the notification listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "error" => Colour::Red,
        "import" | "login" => Colour::Green,
        "import_warning" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        op if op.ends_with("_del") => Colour::Red,
        op if op.ends_with("_add") => Colour::Green,
        op if op.ends_with("_edit") => Colour::Yellow,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        print,
        unread,
        mark_read,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *mark_read {
            let n = notifications::mark_all_read(&pool.conn)?;
            success(format!("{} notification(s) marked as read.", n));
            return Ok(());
        }

        if *print || *unread {
            let list = notifications::list_notifications(&pool.conn, *unread)?;
            if list.is_empty() {
                warning("No notifications.");
                return Ok(());
            }

            for n in &list {
                let colour = color_for_operation(&n.operation);
                let op_target = if n.target.is_empty() {
                    n.operation.clone()
                } else {
                    format!("{} ({})", n.operation, n.target)
                };
                let marker = if n.read { " " } else { "•" };

                println!(
                    "{} {:>4}  {}  {}  {}",
                    marker,
                    n.id,
                    n.date,
                    colour.paint(format!("{op_target:<24}")),
                    n.message
                );
            }
        } else {
            warning("Nothing to do: specify --print, --unread or --mark-read.");
        }
    }
    Ok(())
}
