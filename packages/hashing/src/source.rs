//! Hashing sources larger than memory
//!
//! A [`ChunkSource`] exposes random-access reads over something with a known
//! length. [`hash_source`] walks it front to back in fixed-size chunks,
//! folding each chunk before the next read is issued, so at most one chunk
//! is resident at a time.

use crate::md5::{Md5, Md5Digest};
use crate::{HashError, Result};
use std::future::Future;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Default chunk size for large sources: 10 MiB
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// Random-access byte source of known size
pub trait ChunkSource {
    /// Total size in bytes
    fn size(&self) -> u64;

    /// Read bytes `start..end`
    fn slice(&mut self, start: u64, end: u64) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

fn check_range(start: u64, end: u64, size: u64) -> io::Result<()> {
    if start > end || end > size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("range {start}..{end} outside source of {size} bytes"),
        ));
    }
    Ok(())
}

/// File read through tokio, one seek + read per slice
#[derive(Debug)]
pub struct FileSource {
    file: File,
    size: u64,
}

impl FileSource {
    /// Open `path` and record its current length
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or stat'ed.
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path).await?;
        let size = file.metadata().await?.len();
        Ok(Self { file, size })
    }
}

impl ChunkSource for FileSource {
    fn size(&self) -> u64 {
        self.size
    }

    async fn slice(&mut self, start: u64, end: u64) -> io::Result<Vec<u8>> {
        check_range(start, end, self.size)?;
        let len = usize::try_from(end - start)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut buf = vec![0u8; len];
        self.file.seek(io::SeekFrom::Start(start)).await?;
        self.file.read_exact(&mut buf).await?;
        Ok(buf)
    }
}

/// In-memory bytes presented as a chunk source
#[derive(Clone, Copy, Debug)]
pub struct MemorySource<'a> {
    data: &'a [u8],
}

impl<'a> MemorySource<'a> {
    /// Wrap a byte slice
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl ChunkSource for MemorySource<'_> {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    async fn slice(&mut self, start: u64, end: u64) -> io::Result<Vec<u8>> {
        check_range(start, end, self.size())?;
        // In range, so both fit in usize.
        Ok(self.data[start as usize..end as usize].to_vec())
    }
}

/// Hash a source chunk by chunk in strict offset order
///
/// # Errors
///
/// Returns `InvalidParameters` for a zero chunk size, `Io` when a read fails
/// and `StreamProcessing` when a source returns the wrong number of bytes.
pub async fn hash_source<S: ChunkSource>(source: &mut S, chunk_size: usize) -> Result<Md5Digest> {
    if chunk_size == 0 {
        return Err(HashError::invalid_parameters("chunk size must be non-zero"));
    }
    let size = source.size();
    let step = chunk_size as u64;
    tracing::debug!(size, chunk_size, "hashing chunked source");

    let mut hasher = Md5::new();
    let mut offset = 0u64;
    while offset < size {
        let end = size.min(offset.saturating_add(step));
        let chunk = source.slice(offset, end).await?;
        if chunk.len() as u64 != end - offset {
            return Err(HashError::StreamProcessing(format!(
                "source returned {} bytes for range {offset}..{end}",
                chunk.len()
            )));
        }
        hasher.update(chunk);
        tracing::trace!(offset, end, "folded chunk");
        offset = end;
    }
    Ok(hasher.finalize())
}

/// Hash a file in `chunk_size` pieces
///
/// # Errors
///
/// As [`hash_source`], plus `Io` when the file cannot be opened.
pub async fn hash_file(path: impl AsRef<Path>, chunk_size: usize) -> Result<Md5Digest> {
    let mut source = FileSource::open(path).await?;
    hash_source(&mut source, chunk_size).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md5::Md5;

    struct ShortReads<'a>(MemorySource<'a>);

    impl ChunkSource for ShortReads<'_> {
        fn size(&self) -> u64 {
            self.0.size()
        }

        async fn slice(&mut self, start: u64, end: u64) -> io::Result<Vec<u8>> {
            let mut bytes = self.0.slice(start, end).await?;
            bytes.pop();
            Ok(bytes)
        }
    }

    #[tokio::test]
    async fn test_memory_source_matches_oneshot() -> Result<()> {
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        for chunk_size in [1, 7, 63, 64, 65, 999, 1000, 4096] {
            let digest = hash_source(&mut MemorySource::new(&data), chunk_size).await?;
            assert_eq!(digest, Md5::digest(&data), "chunk size {chunk_size}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_source() -> Result<()> {
        let digest = hash_source(&mut MemorySource::new(&[]), DEFAULT_CHUNK_SIZE).await?;
        assert_eq!(hex::encode(digest), "d41d8cd98f00b204e9800998ecf8427e");
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_chunk_size_rejected() {
        let result = hash_source(&mut MemorySource::new(b"abc"), 0).await;
        assert!(matches!(result, Err(HashError::InvalidParameters(_))));
    }

    #[tokio::test]
    async fn test_short_reads_detected() {
        let mut source = ShortReads(MemorySource::new(b"abcdef"));
        let result = hash_source(&mut source, 4).await;
        assert!(matches!(result, Err(HashError::StreamProcessing(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_slice() {
        let mut source = MemorySource::new(b"abc");
        let err = source.slice(2, 5).await;
        assert!(matches!(err, Err(e) if e.kind() == io::ErrorKind::InvalidInput));
    }
}
