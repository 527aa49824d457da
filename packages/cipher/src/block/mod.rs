//! The 16-byte keyed AES permutation
//!
//! [`BlockCore`] is the seam between the mode engines and the two AES
//! implementations: [`SoftAes`] (portable, FIPS-197) and, with the `native`
//! feature, [`NativeAes`] (RustCrypto `aes`, AES-NI / ARMv8 when present).

#[cfg(feature = "native")]
mod native;
mod soft;

#[cfg(feature = "native")]
pub use native::NativeAes;
pub use soft::SoftAes;

use crate::{CipherError, Result};

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// One AES block
pub type Block = [u8; BLOCK_SIZE];

/// Keyed block permutation
pub trait BlockCore: Send + Sync {
    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut Block);
}

pub(crate) fn validate_key_length(len: usize) -> Result<()> {
    match len {
        16 | 24 | 32 => Ok(()),
        actual => Err(CipherError::UnsupportedKeyLength { actual }),
    }
}

/// Unpack four big-endian words into a block
pub(crate) fn words_to_block(words: &[u32]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (dst, word) in block.chunks_exact_mut(4).zip(words) {
        dst.copy_from_slice(&word.to_be_bytes());
    }
    block
}

/// Pack a block back into four big-endian words
pub(crate) fn block_to_words(block: &Block, words: &mut [u32]) {
    for (word, src) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([src[0], src[1], src[2], src[3]]);
    }
}

pub(crate) fn xor_in_place(block: &mut Block, other: &Block) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}
