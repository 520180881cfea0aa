//! Punch timestamp normalization.
//!
//! Write path: the digits of the source text are stored as-is, as if they
//! were UTC. Read path: stored instants are shifted forward by a fixed
//! offset before formatting. Existing stored data was written under this
//! scheme, so both halves must stay exactly as they are; the offset is a
//! stored parameter so a deployment can correct display without rewriting
//! rows.

use crate::db::parameters;
use crate::errors::AppResult;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::Connection;

pub const DEFAULT_DISPLAY_OFFSET_HOURS: i64 = 3;

/// Combine a date and a wall-clock time into a storable timestamp.
/// No timezone shifting: "2024-01-15" + "08:00" stores
/// "2024-01-15T08:00:00Z" literally.
pub fn store_timestamp(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Split a stored timestamp into the date and time shown to the user:
/// add the display offset, then format.
pub fn display_parts(ts: DateTime<Utc>, offset_hours: i64) -> (NaiveDate, NaiveTime) {
    let shifted = ts + Duration::hours(offset_hours);
    (shifted.date_naive(), shifted.time())
}

pub fn display_time(ts: DateTime<Utc>, offset_hours: i64) -> String {
    let (_, t) = display_parts(ts, offset_hours);
    t.format("%H:%M").to_string()
}

/// Current display offset from `parametros`, falling back to the default.
pub fn display_offset(conn: &Connection) -> AppResult<i64> {
    let hours = parameters::get_param(conn, crate::models::parameter::PARAM_DISPLAY_OFFSET)?
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_DISPLAY_OFFSET_HOURS);
    Ok(hours)
}
