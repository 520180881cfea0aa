//! ClockFlow library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Auth { .. } => cli::commands::auth::handle(&cli.command, cfg),
        Commands::Company { .. } => cli::commands::company::handle(&cli.command, cfg),
        Commands::CostCenter { .. } => cli::commands::cost_center::handle(&cli.command, cfg),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Notify { .. } => cli::commands::notify::handle(&cli.command, cfg),
        Commands::Param { .. } => cli::commands::param::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Apply database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let result = dispatch(&cli, &cfg);

    // Every failure is also surfaced as an unread notification.
    // Best effort: the database itself may be the failing part.
    if let Err(e) = &result
        && let Ok(pool) = db::pool::DbPool::new(&cfg.database)
    {
        let _ = db::notifications::notify(&pool.conn, "error", "", &e.to_string());
    }

    result
}
