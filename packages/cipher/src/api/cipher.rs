//! Entry point for the fluent cipher API

use super::aes_builder::AesBuilder;
use crate::modes::Mode;
use crate::{CipherError, Result};
use cryptkit_common::WordArray;

/// Entry point for cipher operations
pub struct Cipher;

impl Cipher {
    /// AES builder with CBC, PKCS7 and the best compiled-in backend
    #[must_use]
    pub fn aes() -> AesBuilder {
        AesBuilder::new()
    }

    /// Fresh IV of the default length for `mode` (16 bytes CBC, 12 bytes GCM)
    ///
    /// # Errors
    ///
    /// Returns `Random` when the OS has no secure random source.
    pub fn generate_iv(mode: Mode) -> Result<Vec<u8>> {
        Ok(WordArray::random(mode.default_iv_len())?.to_bytes())
    }

    /// Fresh AES key of `bits` (128, 192 or 256)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKeyLength` for other sizes and `Random` when the
    /// OS has no secure random source.
    pub fn generate_key(bits: usize) -> Result<Vec<u8>> {
        match bits {
            128 | 192 | 256 => Ok(WordArray::random(bits / 8)?.to_bytes()),
            _ => Err(CipherError::UnsupportedKeyLength { actual: bits / 8 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_lengths() -> Result<()> {
        assert_eq!(Cipher::generate_iv(Mode::Cbc)?.len(), 16);
        assert_eq!(Cipher::generate_iv(Mode::Gcm)?.len(), 12);
        assert_eq!(Cipher::generate_key(192)?.len(), 24);
        assert!(Cipher::generate_key(100).is_err());
        Ok(())
    }

    #[test]
    fn test_generated_keys_differ() -> Result<()> {
        assert_ne!(Cipher::generate_key(256)?, Cipher::generate_key(256)?);
        Ok(())
    }
}
