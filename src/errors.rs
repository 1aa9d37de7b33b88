//! Unified application error type.
//! Every module (core, config, export, cli) returns AppError so the binary
//! can report a single descriptive line per failure.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Loading the record set
    // ---------------------------
    #[error("Failed to load shift data from {path}: {reason}")]
    Load { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM or 'all')")]
    InvalidMonth(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    #[error("Unknown shift type: {0}")]
    UnknownShiftType(String),

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
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap any failure that happened while reading the data file.
    pub fn load(path: impl AsRef<std::path::Path>, reason: impl std::fmt::Display) -> Self {
        AppError::Load {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
