//! Unified application error type.
//! All modules (storage, core, cli, export) return AppError to keep the error
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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Cloud errors
    // ---------------------------
    #[error("Cloud request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cloud error: {0}")]
    Cloud(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

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

pub type AppResult<T> = Result<T, AppError>;
