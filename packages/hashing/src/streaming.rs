//! Streaming MD5 over async byte streams
//!
//! Each input chunk is folded as it arrives; progress is reported per chunk
//! and the digest is emitted once the input ends.

use crate::hash_result::HashResult;
use crate::md5::Md5;
use crate::{HashError, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Stream adapter that hashes chunks incrementally
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        hasher: Option<Md5>,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Wrap a stream of byte chunks
    pub fn new(input: S) -> Self {
        Self {
            input,
            hasher: Some(Md5::new()),
            total_bytes: 0,
        }
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Result of streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final digest
    pub hash: HashResult,
    /// Total bytes processed
    pub total_bytes: u64,
}

/// Progress item yielded by [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes processed in this chunk
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Whether this is the final item carrying the digest
    pub is_final: bool,
    /// Final digest (only present if `is_final` = true)
    pub digest: Option<HashResult>,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(hasher) = this.hasher.as_mut() else {
            return Poll::Ready(None);
        };

        match this.input.as_mut().poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;
                hasher.update(chunk);

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    is_final: false,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                let digest = this.hasher.take().map(|h| HashResult::md5(h.finalize()));
                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    is_final: true,
                    digest,
                })))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a streaming MD5 hasher from any stream of byte chunks
pub fn stream_md5<S>(input: S) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input)
}

/// Drive a streaming hasher to completion
///
/// # Errors
///
/// Returns `StreamProcessing` if the stream ends without a digest.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(chunk_result) = hasher.next().await {
        let chunk = chunk_result?;
        if chunk.is_final {
            let hash = chunk.digest.ok_or_else(|| {
                HashError::StreamProcessing("final chunk carried no digest".to_string())
            })?;
            return Ok(StreamHashResult {
                hash,
                total_bytes: chunk.total_bytes,
            });
        }
    }

    Err(HashError::StreamProcessing(
        "Stream ended without producing final hash".to_string(),
    ))
}
