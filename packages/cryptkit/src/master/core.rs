//! Core master builder

#[cfg(feature = "aes")]
use super::CipherMasterBuilder;

#[cfg(feature = "md5")]
use super::HashMasterBuilder;

/// Unified entry point for all cryptkit operations
pub struct Cryptkit;

impl Cryptkit {
    /// Entry point for cipher operations
    /// Example: `Cryptkit::cipher().aes().with_key(key).with_iv(iv).encrypt(data).await`
    #[cfg(feature = "aes")]
    #[must_use]
    pub fn cipher() -> CipherMasterBuilder {
        CipherMasterBuilder
    }

    /// Entry point for hashing operations
    /// Example: `Cryptkit::hash().md5().compute(data).to_hex()`
    #[cfg(feature = "md5")]
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }

    /// Initialize `env_logger` once; honors `RUST_LOG`
    pub fn init_logging() {
        cryptkit_common::LoggingTransformer::init();
    }
}
