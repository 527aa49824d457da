//! Shared infrastructure for the cryptkit crates
//!
//! - [`WordArray`]: byte sequences packed into big-endian 32-bit words
//! - [`BufferedBlockProcessor`]: accumulate/drain block processing used by
//!   both the AES mode engines and the MD5 hasher
//! - [`LoggingTransformer`]: `env_logger` setup and redacted crypto logging

#![forbid(unsafe_code)]

pub mod block_buffer;
pub mod error;
pub mod logging;
pub mod word_array;

pub use block_buffer::BufferedBlockProcessor;
pub use error::{Result, WordArrayError};
pub use logging::LoggingTransformer;
pub use word_array::WordArray;
