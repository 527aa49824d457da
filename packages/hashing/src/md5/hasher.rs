//! Incremental MD5 over the shared block processor

use super::{BLOCK_SIZE, Md5Digest, Md5State};
use cryptkit_common::{BufferedBlockProcessor, WordArray};

const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Incremental MD5 hasher
///
/// Input accumulates in a [`BufferedBlockProcessor`]; every full 16-word
/// block is handed to the compression function as soon as it is complete,
/// so memory use stays bounded by one block regardless of input size.
#[derive(Clone, Debug)]
pub struct Md5 {
    state: Md5State,
    buffer: BufferedBlockProcessor,
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Fresh hasher
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Md5State::new(),
            buffer: BufferedBlockProcessor::new(BLOCK_WORDS, 0),
        }
    }

    /// One-shot digest
    #[must_use]
    pub fn digest(data: impl Into<WordArray>) -> Md5Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Feed more input; text is hashed as UTF-8
    pub fn update(&mut self, data: impl Into<WordArray>) -> &mut Self {
        self.buffer.append(data);
        let state = &mut self.state;
        // The buffer packs big-endian; MD5 reads little-endian words.
        self.buffer.process(false, |block| {
            let mut m = [0u32; BLOCK_WORDS];
            for (dst, word) in m.iter_mut().zip(block.iter()) {
                *dst = word.swap_bytes();
            }
            state.compress(&m);
        });
        self
    }

    /// Total bytes fed so far
    #[must_use]
    pub fn bytes_seen(&self) -> u64 {
        self.buffer.data_bytes()
    }

    /// Start over without reallocating
    pub fn reset(&mut self) {
        self.state = Md5State::new();
        self.buffer.reset();
    }

    /// Finish and return the digest
    #[must_use]
    pub fn finalize(self) -> Md5Digest {
        let remainder = self.buffer.pending().to_bytes();
        let bit_len = self.buffer.data_bytes().wrapping_mul(8);
        self.state.finalize(&remainder, bit_len)
    }
}
