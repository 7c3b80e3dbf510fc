//! Unified application error type.
//! Every layer (store, core, ingest, export, cli) returns AppError so that
//! failures surface to the user in one consistent shape.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage write rejected: {0}")]
    Storage(String),

    #[error("Stored data is inconsistent: {0}")]
    StoreContract(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No record found for date {0}")]
    NoRecordForDate(String),

    #[error("Invalid policy: {0}")]
    Policy(String),

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
