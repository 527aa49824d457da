//! Per-call cipher parameters

use crate::backend::Backend;
use crate::block::validate_key_length;
use crate::padding::PaddingScheme;
use crate::Result;
use std::fmt;
use zeroize::Zeroizing;

/// Everything a mode engine needs for one encrypt or decrypt call
///
/// Built fresh per call; the key is wiped when the context drops.
#[derive(Clone)]
pub struct CipherContext {
    pub(crate) key: Zeroizing<Vec<u8>>,
    pub(crate) iv: Option<Vec<u8>>,
    pub(crate) aad: Option<Vec<u8>>,
    pub(crate) padding: PaddingScheme,
    pub(crate) backend: Backend,
}

impl CipherContext {
    /// Create a context, rejecting keys that are not 16, 24 or 32 bytes
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKeyLength` for any other key size.
    pub fn new(key: impl Into<Vec<u8>>, backend: Backend) -> Result<Self> {
        let key = Zeroizing::new(key.into());
        validate_key_length(key.len())?;
        Ok(Self {
            key,
            iv: None,
            aad: None,
            padding: PaddingScheme::default(),
            backend,
        })
    }

    /// Set the IV (nonce for GCM)
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<Vec<u8>>) -> Self {
        self.iv = Some(iv.into());
        self
    }

    /// Set additional authenticated data; ignored by CBC
    #[must_use]
    pub fn with_aad(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.aad = Some(aad.into());
        self
    }

    /// Set the padding scheme; ignored by GCM
    #[must_use]
    pub fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.padding = padding;
        self
    }

    /// Key size in bits
    #[must_use]
    pub fn key_bits(&self) -> usize {
        self.key.len() * 8
    }

    /// Selected backend
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Selected padding
    #[must_use]
    pub fn padding(&self) -> PaddingScheme {
        self.padding
    }

    pub(crate) fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    pub(crate) fn aad(&self) -> &[u8] {
        self.aad.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("key_bits", &self.key_bits())
            .field("iv_len", &self.iv.as_ref().map(Vec::len))
            .field("aad_len", &self.aad.as_ref().map(Vec::len))
            .field("padding", &self.padding)
            .field("backend", &self.backend)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CipherError;

    #[test]
    fn test_rejects_bad_key() {
        assert!(matches!(
            CipherContext::new(vec![0u8; 17], Backend::Software),
            Err(CipherError::UnsupportedKeyLength { actual: 17 })
        ));
    }

    #[test]
    fn test_debug_hides_key() -> Result<()> {
        let ctx = CipherContext::new(vec![0xabu8; 32], Backend::Software)?.with_iv([1u8; 16]);
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("key_bits: 256"));
        assert!(!rendered.contains("171"));
        Ok(())
    }
}
