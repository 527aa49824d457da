//! AES decryption operations

use super::builder_types::{AesWithKey, AesWithKeyAndHandler};
use super::encrypt_operations::YIELD_THRESHOLD;
use crate::backend::Backend;
use crate::config::AesConfig;
use crate::context::CipherContext;
use crate::encoded::CipherInput;
use crate::Result;
use cryptkit_common::LoggingTransformer;
use std::time::Instant;

impl AesWithKey {
    /// Decrypt hex text or raw bytes back to plaintext bytes
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKeyLength` before looking at the input, then
    /// `HexDecode` for malformed hex text, `InvalidCiphertextLength`
    /// or `InvalidPadding` for damaged CBC input, and `Authentication` when a
    /// GCM tag does not verify.
    pub async fn decrypt(self, data: impl Into<CipherInput>) -> Result<Vec<u8>> {
        let ctx = self.context()?;
        let ciphertext = data.into().into_bytes()?;
        aes_decrypt(&self.config, ctx, &ciphertext).await
    }
}

impl<F, T> AesWithKeyAndHandler<F, T>
where
    F: FnOnce(Result<Vec<u8>>) -> T + Send,
{
    /// Decrypt and hand the plaintext result to the handler
    pub async fn decrypt(self, data: impl Into<CipherInput>) -> T {
        let inner = self.inner;
        let result = match inner.context() {
            Ok(ctx) => match data.into().into_bytes() {
                Ok(ciphertext) => aes_decrypt(&inner.config, ctx, &ciphertext).await,
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        (self.result_handler)(result)
    }
}

pub(super) async fn aes_decrypt(
    config: &AesConfig,
    ctx: CipherContext,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let engine = config.mode.engine();
    tracing::debug!(
        mode = engine.name(),
        backend = ctx.backend().name(),
        key_bits = ctx.key_bits(),
        len = ciphertext.len(),
        "AES decrypt"
    );

    if ctx.backend() == Backend::Native && ciphertext.len() > YIELD_THRESHOLD {
        tokio::task::yield_now().await;
    }

    let started = Instant::now();
    let result = engine.decrypt(&ctx, ciphertext);
    LoggingTransformer::log_performance_metric(
        "aes decrypt",
        ciphertext.len() as u64,
        started.elapsed(),
        result.is_ok(),
    );
    if let Err(e) = &result {
        LoggingTransformer::log_crypto_error("aes decrypt", e);
    }
    result
}
