//! Structured logging setup
//!
//! Library code emits `tracing` events; with the `log` bridge enabled they
//! reach the `env_logger` backend installed here. Key material, IVs and
//! plaintext are never logged, only lengths and error kinds.

use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the cryptkit crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at application startup
    ///
    /// Levels come from `RUST_LOG`, e.g. `RUST_LOG=cryptkit_cipher=debug`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for tests; safe to call from every test
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed cryptographic operation by type only; error messages can
    /// echo caller input
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!("{}", crypto_error_message(operation, error));
    }

    /// Log timing for a completed or failed operation
    pub fn log_performance_metric(operation: &str, bytes: u64, elapsed: Duration, success: bool) {
        let millis = elapsed.as_millis();
        if success {
            debug!("Performance: {operation} processed {bytes} bytes in {millis}ms");
        } else {
            warn!("Performance: {operation} failed after {bytes} bytes and {millis}ms");
        }
    }
}

fn crypto_error_message(operation: &str, error: &dyn std::error::Error) -> String {
    format!(
        "Cryptographic operation failed: {} (error_type: {})",
        operation,
        std::any::type_name_of_val(error)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        LoggingTransformer::log_crypto_error("decrypt", &err);
        LoggingTransformer::log_performance_metric("md5", 1024, Duration::from_millis(3), true);
        LoggingTransformer::log_performance_metric("md5", 0, Duration::ZERO, false);
    }

    #[test]
    fn test_crypto_error_message_omits_error_text() {
        let err = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid character 'z' at position 3",
        );
        let message = crypto_error_message("aes decrypt", &err);
        assert!(message.starts_with("Cryptographic operation failed: aes decrypt"));
        assert!(!message.contains("position 3"));
        assert!(!message.contains("'z'"));
    }
}
