//! Error types
//!
//! Unified error types (thiserror). `PingError::external_message` gives the
//! text that is safe to return to HTTP clients; the `Display` output carries
//! full details and belongs in server logs only.

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Pingboard error type
#[derive(Debug, Error)]
pub enum PingError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Persistence file could not be read, parsed or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PingError {
    /// Returns a message that is safe to expose to external clients.
    ///
    /// Validation messages describe the caller's own input and are returned
    /// as-is. Everything else is replaced by a generic message so that file
    /// paths and OS errors stay in the logs.
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(message)) => message.clone(),
            Self::Common(_) => "Request error".to_string(),
            Self::Storage(_) => "Storage error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// True when the error was caused by the client's request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Common(CommonError::Validation(_)) | Self::Common(CommonError::Serialization(_))
        )
    }
}

/// Result alias used across the workspace
pub type PingResult<T> = Result<T, PingError>;
