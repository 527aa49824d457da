//! Errors raised by the shared word-buffer primitives

use thiserror::Error;

/// Word buffer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordArrayError {
    /// The platform offers no cryptographically secure random source
    #[error("Secure random source unavailable: {0}")]
    SecureRandomUnavailable(String),

    /// Significant bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Result type for word buffer operations
pub type Result<T> = std::result::Result<T, WordArrayError>;
