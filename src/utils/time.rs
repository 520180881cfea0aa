//! Time utilities: parsing HH:MM strings from CLI arguments and files.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a comma-separated list of punch times ("08:00,12:00,13:00,17:00").
/// Empty segments are allowed and skipped.
pub fn parse_time_list(input: &str) -> AppResult<Vec<NaiveTime>> {
    let mut out = Vec::new();
    for raw in input.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let t = parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;
        out.push(t);
    }
    Ok(out)
}
