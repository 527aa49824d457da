//! # Cryptkit Hashing
//!
//! Streaming MD5 that never needs the whole input in memory: feed it
//! incrementally, from an async stream, or from a [`ChunkSource`] such as a
//! file read 10 MiB at a time.
//!
//! ```no_run
//! use cryptkit_hashing::Hash;
//!
//! # async fn demo() -> cryptkit_hashing::Result<()> {
//! assert_eq!(Hash::md5().compute("abc").to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! let digest = Hash::md5().compute_file("large.iso").await?;
//! println!("{digest}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod hash_result;
pub mod md5;
pub mod source;
pub mod streaming;

pub use api::{Hash, HashInput, Md5Builder, Md5BuilderWithHandler};
pub use config::HashConfig;
pub use error::{HashError, Result};
pub use hash_result::HashResult;
pub use md5::{Md5, Md5Digest, Md5State, md5_hex};
pub use source::{ChunkSource, DEFAULT_CHUNK_SIZE, FileSource, MemorySource, hash_file, hash_source};
pub use streaming::{StreamHashChunk, StreamHashResult, StreamingHasher, collect_hash, stream_md5};
