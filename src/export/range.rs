use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end` (same granularity on both sides)
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, _) = parse_period(start_raw.trim())?;
        let (_, end) = parse_period(end_raw.trim())?;

        if start > end {
            return Err(AppError::InvalidDate(format!("range start after end: {r}")));
        }
        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

/// Expand a single period expression into its first and last day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let last = last_day_of_month(first);
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(p.to_string())),
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (y, m) = (first.year(), first.month());
    let next_month = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    };
    // First of the month always exists, so the predecessor does too.
    next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}
