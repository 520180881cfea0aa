//! Manual-entry template: a CSV skeleton users fill in and feed back
//! through `import --csv`.

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use std::io;
use std::path::Path;

pub const TEMPLATE_HEADERS: [&str; 10] = [
    "Matricula", "Data", "Entrada1", "Saida1", "Entrada2", "Saida2", "Entrada3", "Saida3",
    "Entrada4", "Saida4",
];

pub fn write_template(path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(TEMPLATE_HEADERS)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    // One example row so the expected formats are visible.
    wtr.write_record([
        "100", "2024-01-15", "08:00", "12:00", "13:00", "17:00", "", "", "", "",
    ])
    .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("Template", path);
    Ok(())
}
