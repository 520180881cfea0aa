use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!(
                    "No configuration file at {} (run 'clockflow init')",
                    path.display()
                ));
            }
        } else {
            println!("📄 Config file : {}", path.display());
            println!("🗄️  Database   : {}", cfg.database);
            println!("🖼️  Photos dir : {}", cfg.photos_dir);
        }
    }
    Ok(())
}
