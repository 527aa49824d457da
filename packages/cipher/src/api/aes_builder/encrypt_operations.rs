//! AES encryption operations

use super::builder_types::{AesWithKey, AesWithKeyAndHandler};
use crate::backend::Backend;
use crate::config::AesConfig;
use crate::context::CipherContext;
use crate::encoded::Encoded;
use crate::Result;
use cryptkit_common::{LoggingTransformer, WordArray};
use std::time::Instant;

/// Inputs above this size yield to the runtime before the native engine runs
pub(super) const YIELD_THRESHOLD: usize = 8192;

impl AesWithKey {
    /// Encrypt data; text is taken as its UTF-8 bytes
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKeyLength`, `MissingIv`, `InvalidIvLength`,
    /// `MisalignedInput` (no padding) or `NotImplemented` (GCM on the
    /// software backend).
    pub async fn encrypt(self, data: impl Into<WordArray>) -> Result<Encoded> {
        let data = data.into().to_bytes();
        let ctx = self.context()?;
        let ciphertext = aes_encrypt(&self.config, ctx, &data).await?;
        Ok(Encoded::encode(ciphertext, self.config.output))
    }
}

impl<F, T> AesWithKeyAndHandler<F, T>
where
    F: FnOnce(Result<Vec<u8>>) -> T + Send,
{
    /// Encrypt data and hand the raw ciphertext result to the handler
    pub async fn encrypt(self, data: impl Into<WordArray>) -> T {
        let data = data.into().to_bytes();
        let inner = self.inner;
        let result = match inner.context() {
            Ok(ctx) => aes_encrypt(&inner.config, ctx, &data).await,
            Err(e) => Err(e),
        };
        (self.result_handler)(result)
    }
}

pub(super) async fn aes_encrypt(
    config: &AesConfig,
    ctx: CipherContext,
    data: &[u8],
) -> Result<Vec<u8>> {
    let engine = config.mode.engine();
    tracing::debug!(
        mode = engine.name(),
        backend = ctx.backend().name(),
        key_bits = ctx.key_bits(),
        len = data.len(),
        "AES encrypt"
    );

    if ctx.backend() == Backend::Native && data.len() > YIELD_THRESHOLD {
        tokio::task::yield_now().await;
    }

    let started = Instant::now();
    let result = engine.encrypt(&ctx, data);
    LoggingTransformer::log_performance_metric(
        "aes encrypt",
        data.len() as u64,
        started.elapsed(),
        result.is_ok(),
    );
    if let Err(e) = &result {
        LoggingTransformer::log_crypto_error("aes encrypt", e);
    }
    result
}
