//! Block core backed by the RustCrypto `aes` crate

use super::{Block, BlockCore, validate_key_length};
use crate::{CipherError, Result};
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};
use aes::{Aes128, Aes192, Aes256};

/// Hardware-accelerated AES when the CPU supports it, constant-time fixslice otherwise
#[derive(Clone)]
pub enum NativeAes {
    /// 16-byte key
    Aes128(Aes128),
    /// 24-byte key
    Aes192(Aes192),
    /// 32-byte key
    Aes256(Aes256),
}

impl NativeAes {
    /// Key the native engine
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::UnsupportedKeyLength`] unless `key` is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate_key_length(key.len())?;
        let invalid = |_| CipherError::UnsupportedKeyLength { actual: key.len() };
        Ok(match key.len() {
            16 => Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            24 => Self::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            _ => Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
        })
    }
}

impl BlockCore for NativeAes {
    fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SoftAes;

    #[test]
    fn test_matches_software_core() -> Result<()> {
        for len in [16usize, 24, 32] {
            let key: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(7)).collect();
            let native = NativeAes::new(&key)?;
            let soft = SoftAes::new(&key)?;

            let mut a = [0x5au8; 16];
            let mut b = a;
            native.encrypt_block(&mut a);
            soft.encrypt_block(&mut b);
            assert_eq!(a, b, "AES-{} encrypt", len * 8);

            native.decrypt_block(&mut a);
            soft.decrypt_block(&mut b);
            assert_eq!(a, [0x5au8; 16]);
            assert_eq!(b, [0x5au8; 16]);
        }
        Ok(())
    }
}
