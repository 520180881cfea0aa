//! Unified application error type.
//! All modules (db, core, cli, storage) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Duplicate value: {0}")]
    Duplicate(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid filter selection: {0}")]
    InvalidFilter(String),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("No punch records found in the report")]
    NoRecordsFound,

    #[error("Import row {row}: unknown employee matricula '{matricula}'")]
    UnknownEmployee { row: usize, matricula: String },

    #[error("Import row {row}: unknown cost center '{label}' for company {company_id}")]
    UnknownCostCenter {
        row: usize,
        label: String,
        company_id: i64,
    },

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No active session")]
    NoSession,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / storage errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Photo store error: {0}")]
    Photo(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
