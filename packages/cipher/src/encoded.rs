//! Encodings at the facade boundary

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested encoding of encryption output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// Raw bytes
    #[default]
    Bytes,
    /// Lowercase hex text
    Hex,
}

/// Encryption output, raw or hex encoded
#[derive(Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Raw ciphertext
    Bytes(Vec<u8>),
    /// Lowercase hex of the ciphertext
    Hex(String),
}

impl Encoded {
    pub(crate) fn encode(data: Vec<u8>, encoding: OutputEncoding) -> Self {
        match encoding {
            OutputEncoding::Bytes => Self::Bytes(data),
            OutputEncoding::Hex => Self::Hex(hex::encode(data)),
        }
    }

    /// Hex text regardless of how the output was produced
    #[must_use]
    pub fn to_hex(&self) -> String {
        match self {
            Self::Bytes(bytes) => hex::encode(bytes),
            Self::Hex(text) => text.clone(),
        }
    }

    /// Raw bytes regardless of how the output was produced
    ///
    /// # Errors
    ///
    /// Returns `HexDecode` if a `Hex` value was built by hand with invalid text.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Hex(text) => Ok(hex::decode(text)?),
        }
    }

    /// Length of the encoded representation
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Hex(text) => text.len(),
        }
    }

    /// True for empty output
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "Encoded::Bytes({} bytes)", bytes.len()),
            Self::Hex(text) => write!(f, "Encoded::Hex({text})"),
        }
    }
}

/// Decryption input: text is hex, anything else is raw
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherInput {
    /// Hex-encoded ciphertext
    Hex(String),
    /// Raw ciphertext
    Bytes(Vec<u8>),
}

impl CipherInput {
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Hex(text) => Ok(hex::decode(text.trim())?),
            Self::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<&str> for CipherInput {
    fn from(text: &str) -> Self {
        Self::Hex(text.to_string())
    }
}

impl From<String> for CipherInput {
    fn from(text: String) -> Self {
        Self::Hex(text)
    }
}

impl From<&String> for CipherInput {
    fn from(text: &String) -> Self {
        Self::Hex(text.clone())
    }
}

impl From<Vec<u8>> for CipherInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for CipherInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for CipherInput {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Encoded> for CipherInput {
    fn from(encoded: Encoded) -> Self {
        match encoded {
            Encoded::Bytes(bytes) => Self::Bytes(bytes),
            Encoded::Hex(text) => Self::Hex(text),
        }
    }
}

impl From<&Encoded> for CipherInput {
    fn from(encoded: &Encoded) -> Self {
        encoded.clone().into()
    }
}
