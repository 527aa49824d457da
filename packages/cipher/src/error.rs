//! Comprehensive error handling for cipher module

use cryptkit_common::WordArrayError;
use thiserror::Error;

/// Cipher-specific errors
#[derive(Debug, Error)]
pub enum CipherError {
    /// CBC or GCM was invoked without an IV
    #[error("Missing IV: this mode requires an initialization vector")]
    MissingIv,

    /// IV has the wrong length for the selected mode
    #[error("Invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        /// Accepted length(s) in bytes
        expected: &'static str,
        /// Actual IV length in bytes
        actual: usize,
    },

    /// PKCS7 padding is out of range or inconsistent
    #[error("Invalid padding")]
    InvalidPadding,

    /// Key is not 16, 24 or 32 bytes
    #[error("Unsupported key length: expected 16, 24 or 32 bytes, got {actual}")]
    UnsupportedKeyLength {
        /// Actual key length in bytes
        actual: usize,
    },

    /// Requested path has no implementation (GCM without a native engine)
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Data handed to the no-padding scheme is not block aligned
    #[error("Misaligned input: {len} bytes is not a multiple of the {block_size}-byte block size")]
    MisalignedInput {
        /// Input length in bytes
        len: usize,
        /// Block size in bytes
        block_size: usize,
    },

    /// Padding block size outside 1..=255
    #[error("Invalid block size for padding: {0}")]
    InvalidBlockSize(usize),

    /// CBC ciphertext is not a multiple of the block size
    #[error("Invalid ciphertext length: {0} bytes is not a multiple of 16")]
    InvalidCiphertextLength(usize),

    /// Authentication tag did not verify
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Failure reported by the native engine
    #[error("Native engine error: {0}")]
    Platform(String),

    /// Hex decoding operation failed
    #[error("Hex decoding error: {0}")]
    HexDecode(String),

    /// Secure random source failed
    #[error("Random source error: {0}")]
    Random(#[from] WordArrayError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for CipherError {
    fn from(err: hex::FromHexError) -> Self {
        CipherError::HexDecode(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        CipherError::Config(err.to_string())
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
