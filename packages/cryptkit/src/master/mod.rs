//! Master builder for all cryptkit operations, split by operation type

pub mod cipher;
pub mod core;
pub mod hash;

pub use core::Cryptkit;

#[cfg(feature = "aes")]
pub use cipher::CipherMasterBuilder;

#[cfg(feature = "md5")]
pub use hash::HashMasterBuilder;
