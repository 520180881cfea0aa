use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::notifications;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing ClockFlow…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    // Non-blocking audit entry
    if let Err(e) = notifications::notify(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        eprintln!("⚠️ Failed to write notification: {}", e);
    }

    println!("✅ Database initialized at {}", &cfg.database);
    Ok(())
}
