//! Crate-wide error type.

/// Result type for mesinyer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of dialog input validation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
