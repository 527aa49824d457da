//! AES builder type definitions

use crate::backend::Backend;
use crate::config::AesConfig;
use crate::context::CipherContext;
use crate::encoded::OutputEncoding;
use crate::modes::Mode;
use crate::padding::PaddingScheme;
use crate::Result;
use cryptkit_common::WordArray;
use zeroize::Zeroizing;

/// Initial AES builder - entry point
#[derive(Clone, Debug, Default)]
pub struct AesBuilder {
    pub(super) config: AesConfig,
}

/// AES builder with key
pub struct AesWithKey {
    pub(super) config: AesConfig,
    pub(super) key: Zeroizing<Vec<u8>>,
    pub(super) iv: Option<Vec<u8>>,
    pub(super) aad: Option<Vec<u8>>,
}

/// AES builder with key and result handler
pub struct AesWithKeyAndHandler<F, T> {
    pub(super) inner: AesWithKey,
    pub(super) result_handler: F,
    pub(super) _phantom: std::marker::PhantomData<T>,
}

impl AesBuilder {
    /// Create new AES builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`
    #[must_use]
    pub fn with_config(mut self, config: AesConfig) -> Self {
        self.config = config;
        self
    }

    /// Select the mode of operation
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Shorthand for `with_mode(Mode::Cbc)`
    #[must_use]
    pub fn cbc(self) -> Self {
        self.with_mode(Mode::Cbc)
    }

    /// Shorthand for `with_mode(Mode::Gcm)`
    #[must_use]
    pub fn gcm(self) -> Self {
        self.with_mode(Mode::Gcm)
    }

    /// Select the CBC padding scheme
    #[must_use]
    pub fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.config.padding = padding;
        self
    }

    /// Pin the engine instead of using the detected default
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Encoding of `encrypt` output
    #[must_use]
    pub fn with_output(mut self, output: OutputEncoding) -> Self {
        self.config.output = output;
        self
    }

    /// Current settings
    #[must_use]
    pub fn config(&self) -> &AesConfig {
        &self.config
    }

    /// Add key to builder; text keys are taken as their UTF-8 bytes
    #[must_use]
    pub fn with_key(self, key: impl Into<WordArray>) -> AesWithKey {
        AesWithKey {
            config: self.config,
            key: Zeroizing::new(key.into().to_bytes()),
            iv: None,
            aad: None,
        }
    }
}

impl AesWithKey {
    /// Set the IV (the nonce for GCM)
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<WordArray>) -> Self {
        self.iv = Some(iv.into().to_bytes());
        self
    }

    /// Add additional authenticated data (AAD) for AES-GCM
    #[must_use]
    pub fn with_aad(mut self, aad: impl Into<WordArray>) -> Self {
        self.aad = Some(aad.into().to_bytes());
        self
    }

    /// Map the operation's result with `handler` instead of returning it
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> AesWithKeyAndHandler<F, T>
    where
        F: FnOnce(Result<Vec<u8>>) -> T + Send,
    {
        AesWithKeyAndHandler {
            inner: self,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Validate the key and assemble the per-call context
    pub(super) fn context(&self) -> Result<CipherContext> {
        let mut ctx = CipherContext::new(self.key.to_vec(), self.config.backend)?
            .with_padding(self.config.padding);
        if let Some(iv) = &self.iv {
            ctx = ctx.with_iv(iv.clone());
        }
        if let Some(aad) = &self.aad {
            ctx = ctx.with_aad(aad.clone());
        }
        Ok(ctx)
    }
}

impl std::fmt::Debug for AesWithKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesWithKey")
            .field("config", &self.config)
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}
