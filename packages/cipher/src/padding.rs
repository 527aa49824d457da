//! Block padding schemes
//!
//! All schemes are pure functions over byte buffers. The PKCS7 check in
//! [`Pkcs7::unpad`] is not constant-time and can leak the position of the
//! first bad byte through timing.

use crate::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Pad/unpad contract shared by all schemes
pub trait Padding {
    /// Extend `data` to a multiple of `block_size`
    ///
    /// # Errors
    ///
    /// Returns an error if the block size is unusable for the scheme or the
    /// scheme cannot represent the input.
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Remove padding added by [`pad`](Self::pad)
    ///
    /// # Errors
    ///
    /// Returns an error if the trailing bytes are not valid padding.
    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// PKCS#7: every pad byte holds the pad length, always 1..=block_size bytes
#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs7;

/// Zero bytes up to the next block boundary.
///
/// Not bijective: genuine trailing zero bytes are indistinguishable from
/// padding and are stripped by [`unpad`](Padding::unpad).
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroPadding;

/// No padding; input must already be block aligned
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPadding;

impl Padding for Pkcs7 {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if block_size == 0 || block_size > usize::from(u8::MAX) {
            return Err(CipherError::InvalidBlockSize(block_size));
        }
        let pad_len = block_size - data.len() % block_size;
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len, pad_len as u8);
        Ok(out)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let pad_len = usize::from(*data.last().ok_or(CipherError::InvalidPadding)?);
        if pad_len == 0 || pad_len > data.len() {
            return Err(CipherError::InvalidPadding);
        }
        let (body, padding) = data.split_at(data.len() - pad_len);
        if padding.iter().any(|&b| usize::from(b) != pad_len) {
            return Err(CipherError::InvalidPadding);
        }
        Ok(body.to_vec())
    }
}

impl Padding for ZeroPadding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if block_size == 0 {
            return Err(CipherError::InvalidBlockSize(block_size));
        }
        let mut out = data.to_vec();
        let rem = data.len() % block_size;
        if rem != 0 {
            out.resize(data.len() + block_size - rem, 0);
        }
        Ok(out)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(data[..end].to_vec())
    }
}

impl Padding for NoPadding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if block_size == 0 {
            return Err(CipherError::InvalidBlockSize(block_size));
        }
        if data.len() % block_size != 0 {
            return Err(CipherError::MisalignedInput {
                len: data.len(),
                block_size,
            });
        }
        Ok(data.to_vec())
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

/// Padding scheme selector used by configuration and the builder API
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingScheme {
    /// PKCS#7
    #[default]
    Pkcs7,
    /// Zero bytes
    Zero,
    /// No padding
    None,
}

impl PaddingScheme {
    fn strategy(self) -> &'static dyn Padding {
        match self {
            Self::Pkcs7 => &Pkcs7,
            Self::Zero => &ZeroPadding,
            Self::None => &NoPadding,
        }
    }
}

impl Padding for PaddingScheme {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        self.strategy().pad(data, block_size)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.strategy().unpad(data)
    }
}
