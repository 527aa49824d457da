//! AES modes of operation
//!
//! Each mode is a stateless [`ModeEngine`]; all per-call state lives in the
//! [`CipherContext`] and in locals of the engine call.

mod cbc;
mod gcm;

pub use cbc::Cbc;
pub use gcm::Gcm;

use crate::context::CipherContext;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Encrypt/decrypt contract shared by all modes
pub trait ModeEngine: Send + Sync {
    /// Mode label used in logs
    fn name(&self) -> &'static str;

    /// Encrypt `data` under `ctx`
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or malformed IV, a padding failure, or
    /// an engine failure.
    fn encrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `data` under `ctx`
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or malformed IV, malformed ciphertext,
    /// bad padding, or a failed authentication check.
    fn decrypt(&self, ctx: &CipherContext, data: &[u8]) -> Result<Vec<u8>>;
}

/// Mode selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Cipher block chaining with padding
    #[default]
    Cbc,
    /// Galois/counter mode, authenticated
    Gcm,
}

impl Mode {
    /// Engine implementing this mode
    #[must_use]
    pub fn engine(self) -> &'static dyn ModeEngine {
        match self {
            Self::Cbc => &Cbc,
            Self::Gcm => &Gcm,
        }
    }

    /// IV length generated by default for this mode
    #[must_use]
    pub const fn default_iv_len(self) -> usize {
        match self {
            Self::Cbc => 16,
            Self::Gcm => 12,
        }
    }
}
