//! Serializable AES defaults

use crate::backend::Backend;
use crate::encoded::OutputEncoding;
use crate::modes::Mode;
use crate::padding::PaddingScheme;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied by [`AesBuilder::with_config`](crate::AesBuilder::with_config)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesConfig {
    /// Mode of operation
    #[serde(default)]
    pub mode: Mode,
    /// Padding for CBC
    #[serde(default)]
    pub padding: PaddingScheme,
    /// Missing or unavailable backends fall back to the best compiled-in one
    #[serde(default = "default_backend")]
    pub backend: Backend,
    /// Encoding of `encrypt` output
    #[serde(default)]
    pub output: OutputEncoding,
}

fn default_backend() -> Backend {
    Backend::detect()
}

impl Default for AesConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            padding: PaddingScheme::default(),
            backend: default_backend(),
            output: OutputEncoding::default(),
        }
    }
}

impl AesConfig {
    /// Parse a JSON document; absent fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Config`](crate::CipherError::Config) on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.resolved())
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Config`](crate::CipherError::Config) when the file
    /// cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            crate::CipherError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    fn resolved(mut self) -> Self {
        if !self.backend.is_available() {
            tracing::warn!(
                requested = self.backend.name(),
                "configured AES backend not compiled in, falling back"
            );
            self.backend = Backend::detect();
        }
        self
    }
}
