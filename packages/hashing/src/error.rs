//! Comprehensive error handling for hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// Reading a file or chunk source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied parameter is unusable (e.g. a zero chunk size)
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A stream or chunk source misbehaved
    #[error("Stream processing error: {0}")]
    StreamProcessing(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HashError {
    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

impl From<serde_json::Error> for HashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
