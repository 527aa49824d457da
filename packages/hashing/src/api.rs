//! Fluent hashing API
//!
//! Usage: `Hash::md5().compute("abc").to_hex()`

use crate::config::HashConfig;
use crate::hash_result::HashResult;
use crate::md5::Md5;
use crate::source::{ChunkSource, FileSource, hash_source};
use crate::streaming::{collect_hash, stream_md5};
use crate::{HashError, Result};
use cryptkit_common::{LoggingTransformer, WordArray};
use futures::Stream;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use MD5
    #[must_use]
    pub fn md5() -> Md5Builder {
        Md5Builder::new()
    }
}

/// What to hash: text as UTF-8, raw bytes, or a file read in chunks
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashInput {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// File on disk, hashed without loading it whole
    File(PathBuf),
}

impl From<&str> for HashInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for HashInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for HashInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for HashInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for HashInput {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for HashInput {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

/// MD5 hash builder
#[derive(Clone, Debug, Default)]
pub struct Md5Builder {
    config: HashConfig,
}

/// MD5 hash builder with result handler
pub struct Md5BuilderWithHandler<F, T> {
    inner: Md5Builder,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

impl Md5Builder {
    /// Create new MD5 builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`
    #[must_use]
    pub fn with_config(mut self, config: HashConfig) -> Self {
        self.config = config;
        self
    }

    /// Chunk size for file and source hashing
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Map the result of [`hash`](Self::hash) with `handler`
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> Md5BuilderWithHandler<F, T>
    where
        F: FnOnce(Result<HashResult>) -> T + Send,
    {
        Md5BuilderWithHandler {
            inner: self,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Hash in-memory data synchronously; text is hashed as UTF-8
    #[must_use]
    pub fn compute(&self, data: impl Into<WordArray>) -> HashResult {
        HashResult::md5(Md5::digest(data))
    }

    /// Hash a file in chunks of the configured size
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file cannot be read and `InvalidParameters` for
    /// a zero chunk size.
    pub async fn compute_file(&self, path: impl AsRef<Path>) -> Result<HashResult> {
        let mut source = match FileSource::open(path.as_ref()).await {
            Ok(source) => source,
            Err(e) => {
                let err = HashError::from(e);
                LoggingTransformer::log_crypto_error("md5 file", &err);
                return Err(err);
            }
        };
        self.compute_source(&mut source).await
    }

    /// Hash any chunk source in chunks of the configured size
    ///
    /// # Errors
    ///
    /// As [`hash_source`].
    pub async fn compute_source<S: ChunkSource>(&self, source: &mut S) -> Result<HashResult> {
        let size = source.size();
        let started = Instant::now();
        let result = hash_source(source, self.config.chunk_size).await.map(HashResult::md5);
        match &result {
            Ok(_) => LoggingTransformer::log_performance_metric("md5", size, started.elapsed(), true),
            Err(e) => LoggingTransformer::log_crypto_error("md5", e),
        }
        result
    }

    /// Hash every chunk of an async stream
    ///
    /// # Errors
    ///
    /// Returns `StreamProcessing` if the stream ends abnormally.
    pub async fn compute_stream<S>(&self, stream: S) -> Result<HashResult>
    where
        S: Stream<Item = Vec<u8>> + Unpin,
    {
        Ok(collect_hash(stream_md5(stream)).await?.hash)
    }

    /// Hash text, bytes or a file
    ///
    /// # Errors
    ///
    /// Only file input can fail; see [`compute_file`](Self::compute_file).
    pub async fn hash(&self, input: impl Into<HashInput>) -> Result<HashResult> {
        self.config.validate()?;
        match input.into() {
            HashInput::Text(text) => Ok(self.compute(text)),
            HashInput::Bytes(bytes) => Ok(self.compute(bytes)),
            HashInput::File(path) => self.compute_file(path).await,
        }
    }
}

impl<F, T> Md5BuilderWithHandler<F, T>
where
    F: FnOnce(Result<HashResult>) -> T + Send,
{
    /// Hash text, bytes or a file and hand the result to the handler
    pub async fn hash(self, input: impl Into<HashInput>) -> T {
        let result = self.inner.hash(input).await;
        (self.result_handler)(result)
    }
}
