//! Native-vs-software engine selection

use crate::block::{BlockCore, SoftAes};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which AES engine a context runs on
///
/// Chosen once when a builder or config is created and carried through
/// every call; nothing probes the platform at encrypt time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// RustCrypto `aes` / `aes-gcm`
    Native,
    /// In-crate FIPS-197 implementation
    Software,
}

impl Backend {
    /// Best backend compiled into this build
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(feature = "native") {
            Self::Native
        } else {
            Self::Software
        }
    }

    /// Whether this build can actually run the backend
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Native => cfg!(feature = "native"),
            Self::Software => true,
        }
    }

    /// Short label for logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Software => "software",
        }
    }

    /// Key a block core for this backend
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKeyLength` for bad keys, or `NotImplemented`
    /// when `Native` is requested from a build without the `native` feature.
    pub fn block_core(self, key: &[u8]) -> Result<Box<dyn BlockCore>> {
        match self {
            Self::Software => Ok(Box::new(SoftAes::new(key)?)),
            #[cfg(feature = "native")]
            Self::Native => Ok(Box::new(crate::block::NativeAes::new(key)?)),
            #[cfg(not(feature = "native"))]
            Self::Native => Err(crate::CipherError::NotImplemented(
                "native AES engine not compiled in; enable the `native` feature".to_string(),
            )),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_always_available() {
        assert!(Backend::Software.is_available());
        assert!(Backend::detect().is_available());
        assert_eq!(Backend::default(), Backend::detect());
    }

    #[test]
    fn test_serde_names() -> std::result::Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Backend::Software)?, "\"software\"");
        let backend: Backend = serde_json::from_str("\"native\"")?;
        assert_eq!(backend, Backend::Native);
        Ok(())
    }
}
