//! Error types for the Elidune session guard

use thiserror::Error;

/// Reasons a stored token could not be read.
///
/// The guard never surfaces these to its callers: a token that fails to
/// decode is simply not valid.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("payload has no numeric exp claim")]
    MissingExpiry,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
