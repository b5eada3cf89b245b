//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Attribute parsing
    // ---------------------------
    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    // ---------------------------
    // Refresh errors
    // ---------------------------
    #[error("Invalid data for entry '{id}': {reason}")]
    InvalidEntryData { id: String, reason: String },

    #[error("Duration {0} hours does not fit in the day total")]
    DurationOverflow(f64),

    #[error("Unknown thingy button response: {0:?}")]
    UnknownButton(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap an attribute-level error into the per-entry classification.
    pub fn for_entry(id: &str, source: AppError) -> Self {
        AppError::InvalidEntryData {
            id: id.to_string(),
            reason: source.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
