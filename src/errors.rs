//! Unified application error type.
//! All modules (db, table, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Data source
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] mongodb::error::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Report / export errors
    // ---------------------------
    #[error("No records for student: {0}")]
    StudentNotFound(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

pub type AppResult<T> = Result<T, AppError>;
