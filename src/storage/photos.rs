//! Employee photo store.
//!
//! A directory-backed blob store: photos are keyed by the filename
//! convention `<matricula>.jpg`.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: PathBuf::from(dir),
        }
    }

    fn key(&self, matricula: &str) -> PathBuf {
        self.dir.join(format!("{matricula}.jpg"))
    }

    /// Copy a photo file into the store under the employee's key.
    pub fn upload(&self, matricula: &str, source: &Path) -> AppResult<PathBuf> {
        if !source.exists() {
            return Err(AppError::Photo(format!(
                "Source file not found: {}",
                source.display()
            )));
        }

        fs::create_dir_all(&self.dir)?;

        let dest = self.key(matricula);
        fs::copy(source, &dest)?;
        Ok(dest)
    }

    pub fn exists(&self, matricula: &str) -> bool {
        self.key(matricula).exists()
    }

    /// Resolved path for a stored photo (the local equivalent of the
    /// public-URL retrieval of a hosted blob store).
    pub fn path(&self, matricula: &str) -> AppResult<PathBuf> {
        let p = self.key(matricula);
        if p.exists() {
            Ok(p)
        } else {
            Err(AppError::Photo(format!("No photo stored for matricula '{matricula}'")))
        }
    }
}
