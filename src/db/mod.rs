pub mod companies;
pub mod cost_centers;
pub mod employees;
pub mod initialize;
pub mod migrate;
pub mod notifications;
pub mod parameters;
pub mod pool;
pub mod punches;
pub mod shifts;
pub mod users;

use crate::errors::AppError;

/// Map a UNIQUE/FK constraint failure to a typed validation error with a
/// human-readable subject; anything else stays a database error.
pub(crate) fn constraint_to_duplicate(e: rusqlite::Error, what: &str) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::Duplicate(what.to_string())
        }
        _ => AppError::Db(e),
    }
}
