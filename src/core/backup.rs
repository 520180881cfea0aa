use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::CompressionMethod;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            return Err(std::io::Error::other(format!(
                "The file '{}' already exists (use --force to overwrite)",
                dest.display()
            ))
            .into());
        }

        if compress {
            let file = fs::File::create(dest)?;
            let mut zip = ZipWriter::new(file);

            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(CompressionMethod::Deflated);

            zip.start_file("clockflow.sqlite", options)
                .map_err(|e| std::io::Error::other(format!("Backup failed (start_file): {e}")))?;

            let db_content = fs::read(src)?;
            zip.write_all(&db_content)?;

            zip.finish()
                .map_err(|e| std::io::Error::other(format!("Backup failed (finish): {e}")))?;
        } else {
            fs::copy(src, dest)?;
        }

        success(format!("📦 Backup created: {}", dest.display()));
        Ok(())
    }
}
