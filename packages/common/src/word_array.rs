//! Byte sequences packed into big-endian 32-bit words
//!
//! A [`WordArray`] stores bytes four to a word, most significant byte first,
//! together with `sig_bytes`: the number of bytes that are actually part of
//! the value. The backing word vector may be longer than needed; nothing past
//! `sig_bytes` is ever returned to callers.

use crate::error::{Result, WordArrayError};
use rand::{TryRngCore, rngs::OsRng};
use std::fmt;

/// Byte sequence packed into big-endian 32-bit words with an explicit
/// significant-byte count.
#[derive(Clone, Default)]
pub struct WordArray {
    words: Vec<u32>,
    sig_bytes: usize,
}

#[inline]
fn byte_shift(pos: usize) -> usize {
    24 - (pos % 4) * 8
}

impl WordArray {
    /// Create an empty word array
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing words. When `sig_bytes` exceeds the words provided the
    /// missing words are zero-filled.
    #[must_use]
    pub fn from_words(mut words: Vec<u32>, sig_bytes: usize) -> Self {
        let needed = sig_bytes.div_ceil(4);
        if words.len() < needed {
            words.resize(needed, 0);
        }
        Self { words, sig_bytes }
    }

    /// Pack raw bytes into words
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; bytes.len().div_ceil(4)];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i >> 2] |= u32::from(byte) << byte_shift(i);
        }
        Self {
            words,
            sig_bytes: bytes.len(),
        }
    }

    /// Fill `byte_len` bytes from the operating system CSPRNG
    ///
    /// # Errors
    ///
    /// Returns [`WordArrayError::SecureRandomUnavailable`] when the platform
    /// has no usable secure random source.
    pub fn random(byte_len: usize) -> Result<Self> {
        let mut bytes = vec![0u8; byte_len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| WordArrayError::SecureRandomUnavailable(e.to_string()))?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Number of significant bytes
    #[must_use]
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// Whether the array holds no significant bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sig_bytes == 0
    }

    /// Backing words. May include words, or bits, past `sig_bytes` unless
    /// [`clamp`](Self::clamp) has been called.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub(crate) fn words_vec_mut(&mut self) -> &mut Vec<u32> {
        &mut self.words
    }

    /// Byte at position `index`, or `None` past `sig_bytes`
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        if index >= self.sig_bytes {
            return None;
        }
        self.words
            .get(index >> 2)
            .map(|word| (word >> byte_shift(index)) as u8)
    }

    /// Zero the bits past `sig_bytes` and drop unused trailing words
    pub fn clamp(&mut self) {
        let rem = self.sig_bytes % 4;
        if rem != 0 {
            if let Some(word) = self.words.get_mut(self.sig_bytes / 4) {
                *word &= u32::MAX << (32 - rem * 8);
            }
        }
        self.words.truncate(self.sig_bytes.div_ceil(4));
    }

    /// Append `other` byte-exactly at this array's `sig_bytes` offset
    pub fn concat(&mut self, other: &WordArray) -> &mut Self {
        self.clamp();
        let offset = self.sig_bytes;

        if offset % 4 == 0 {
            let n_words = other.sig_bytes.div_ceil(4);
            self.words.extend_from_slice(&other.words[..n_words]);
        } else {
            for i in 0..other.sig_bytes {
                let pos = offset + i;
                let idx = pos >> 2;
                if idx == self.words.len() {
                    self.words.push(0);
                }
                let byte = (other.words[i >> 2] >> byte_shift(i)) as u8;
                self.words[idx] |= u32::from(byte) << byte_shift(pos);
            }
        }

        self.sig_bytes += other.sig_bytes;
        self
    }

    /// Significant bytes in order
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.sig_bytes)
            .map(|i| (self.words[i >> 2] >> byte_shift(i)) as u8)
            .collect()
    }

    /// Lowercase hex of the significant bytes
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode the significant bytes as UTF-8
    ///
    /// # Errors
    ///
    /// Returns [`WordArrayError::InvalidUtf8`] when the bytes are not valid UTF-8.
    pub fn to_utf8(&self) -> Result<String> {
        String::from_utf8(self.to_bytes()).map_err(|e| WordArrayError::InvalidUtf8(e.to_string()))
    }
}

impl PartialEq for WordArray {
    fn eq(&self, other: &Self) -> bool {
        self.sig_bytes == other.sig_bytes
            && (0..self.sig_bytes).all(|i| self.byte_at(i) == other.byte_at(i))
    }
}

impl Eq for WordArray {}

impl fmt::Debug for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordArray")
            .field("sig_bytes", &self.sig_bytes)
            .field("words", &self.words.len())
            .finish()
    }
}

impl fmt::Display for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&[u8]> for WordArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for WordArray {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for WordArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<&Vec<u8>> for WordArray {
    fn from(bytes: &Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Text is always encoded as UTF-8
impl From<&str> for WordArray {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<String> for WordArray {
    fn from(text: String) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<&String> for WordArray {
    fn from(text: &String) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<&WordArray> for WordArray {
    fn from(words: &WordArray) -> Self {
        words.clone()
    }
}
