use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::notifications;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(cfg, file, *compress, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        notifications::notify(&pool.conn, "backup", file, "Backup created")?;
    }
    Ok(())
}
