//! Galois/counter mode
//!
//! Only the native engine implements GCM. The 128-bit tag is appended to
//! the ciphertext; AAD from the context is authenticated but not encrypted.

use super::ModeEngine;
use crate::backend::Backend;
use crate::context::CipherContext;
use crate::{CipherError, Result};

/// GCM engine
#[derive(Clone, Copy, Debug, Default)]
pub struct Gcm;

/// Length of the authentication tag appended to every ciphertext
pub const TAG_SIZE: usize = 16;

fn nonce(ctx: &CipherContext) -> Result<&[u8]> {
    let iv = ctx.iv().ok_or(CipherError::MissingIv)?;
    match iv.len() {
        12 | 16 => Ok(iv),
        actual => Err(CipherError::InvalidIvLength {
            expected: "12 or 16",
            actual,
        }),
    }
}

fn software_unsupported() -> CipherError {
    CipherError::NotImplemented(
        "AES-GCM has no software implementation; use a secure native crypto engine".to_string(),
    )
}

impl ModeEngine for Gcm {
    fn name(&self) -> &'static str {
        "gcm"
    }

    fn encrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>> {
        let nonce = nonce(ctx)?;
        match ctx.backend {
            Backend::Software => Err(software_unsupported()),
            Backend::Native => native::seal(&ctx.key, nonce, data, ctx.aad()),
        }
    }

    fn decrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>> {
        let nonce = nonce(ctx)?;
        match ctx.backend {
            Backend::Software => Err(software_unsupported()),
            Backend::Native => native::open(&ctx.key, nonce, data, ctx.aad()),
        }
    }
}

#[cfg(feature = "native")]
mod native {
    use crate::{CipherError, Result};
    use aes::{Aes128, Aes192, Aes256};
    use aes_gcm::AesGcm;
    use aes_gcm::aead::consts::{U12, U16};
    use aes_gcm::aead::{Aead, KeyInit, Nonce, Payload};

    #[derive(Clone, Copy)]
    enum Direction {
        Seal,
        Open,
    }

    fn run<C: KeyInit + Aead>(
        direction: Direction,
        key: &[u8],
        nonce: &[u8],
        msg: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        let cipher = C::new_from_slice(key)
            .map_err(|_| CipherError::UnsupportedKeyLength { actual: key.len() })?;
        let nonce = Nonce::<C>::from_slice(nonce);
        let payload = Payload { msg, aad };
        match direction {
            Direction::Seal => cipher
                .encrypt(nonce, payload)
                .map_err(|e| CipherError::Platform(e.to_string())),
            Direction::Open => cipher.decrypt(nonce, payload).map_err(|_| {
                tracing::warn!("AES-GCM tag verification failed");
                CipherError::Authentication("GCM tag mismatch".to_string())
            }),
        }
    }

    fn dispatch(
        direction: Direction,
        key: &[u8],
        nonce: &[u8],
        msg: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        match (key.len(), nonce.len()) {
            (16, 12) => run::<AesGcm<Aes128, U12>>(direction, key, nonce, msg, aad),
            (24, 12) => run::<AesGcm<Aes192, U12>>(direction, key, nonce, msg, aad),
            (32, 12) => run::<AesGcm<Aes256, U12>>(direction, key, nonce, msg, aad),
            (16, 16) => run::<AesGcm<Aes128, U16>>(direction, key, nonce, msg, aad),
            (24, 16) => run::<AesGcm<Aes192, U16>>(direction, key, nonce, msg, aad),
            (32, 16) => run::<AesGcm<Aes256, U16>>(direction, key, nonce, msg, aad),
            (16 | 24 | 32, actual) => Err(CipherError::InvalidIvLength {
                expected: "12 or 16",
                actual,
            }),
            (actual, _) => Err(CipherError::UnsupportedKeyLength { actual }),
        }
    }

    pub(super) fn seal(key: &[u8], nonce: &[u8], msg: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        dispatch(Direction::Seal, key, nonce, msg, aad)
    }

    pub(super) fn open(key: &[u8], nonce: &[u8], msg: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        dispatch(Direction::Open, key, nonce, msg, aad)
    }
}

#[cfg(not(feature = "native"))]
mod native {
    use crate::Result;

    pub(super) fn seal(_key: &[u8], _nonce: &[u8], _msg: &[u8], _aad: &[u8]) -> Result<Vec<u8>> {
        Err(super::software_unsupported())
    }

    pub(super) fn open(_key: &[u8], _nonce: &[u8], _msg: &[u8], _aad: &[u8]) -> Result<Vec<u8>> {
        Err(super::software_unsupported())
    }
}
