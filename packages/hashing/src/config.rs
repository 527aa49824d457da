//! Serializable hashing defaults

use crate::source::DEFAULT_CHUNK_SIZE;
use crate::{HashError, Result};
use serde::{Deserialize, Serialize};

/// Settings for chunked hashing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Bytes read per chunk from large sources
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

impl HashConfig {
    /// Parse a JSON document; absent fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `Config` on malformed JSON and `InvalidParameters` for a zero
    /// chunk size.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the hasher cannot run with
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` when `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(HashError::invalid_parameters("chunk_size must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        assert_eq!(HashConfig::from_json("{}")?.chunk_size, 10 * 1024 * 1024);
        assert_eq!(HashConfig::from_json(r#"{"chunk_size":4096}"#)?.chunk_size, 4096);
        Ok(())
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        assert!(matches!(
            HashConfig::from_json(r#"{"chunk_size":0}"#),
            Err(HashError::InvalidParameters(_))
        ));
        assert!(matches!(HashConfig::from_json("[1]"), Err(HashError::Config(_))));
    }
}
