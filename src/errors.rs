//! Unified application error type.
//! Every module (db, core, archive, export, cli) returns AppError so the
//! error handling stays consistent across the whole crate.

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

    #[error("Could not read from the store: {0}")]
    DataFetch(String),

    #[error("Could not write to the store: {0}")]
    DataWrite(String),

    #[error("Store call timed out: {0}")]
    Timeout(String),

    // ---------------------------
    // Session gate
    // ---------------------------
    #[error("Attendance already open for: {}", open.join(", "))]
    Conflict { open: Vec<String> },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Archive errors
    // ---------------------------
    #[error("Archive error: {0}")]
    Archive(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
