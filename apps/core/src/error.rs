use std::io;
use thiserror::Error;

/// Application-wide error type for everything outside the turn pipeline.
///
/// The engine itself never fails: these errors only surface while loading
/// content tables, reading configuration or driving the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed JSON content or configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents data validation errors (e.g., a keyword weight above 127).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable seed).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Config(format!("Invalid number: {}", err))
    }
}
