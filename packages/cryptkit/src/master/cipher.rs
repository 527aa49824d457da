//! Cipher master builder

/// Master builder for cipher operations
#[cfg(feature = "aes")]
pub struct CipherMasterBuilder;

#[cfg(feature = "aes")]
impl CipherMasterBuilder {
    /// AES; CBC with PKCS7 unless configured otherwise
    #[must_use]
    pub fn aes(self) -> cryptkit_cipher::AesBuilder {
        cryptkit_cipher::Cipher::aes()
    }
}
