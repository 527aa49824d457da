//! # Cryptkit
//!
//! AES and MD5 behind one entry point, with feature-gated components:
//!
//! - `aes` - AES-128/192/256 in CBC and GCM modes
//! - `native` - RustCrypto engine for AES (hardware accelerated where
//!   available); required for GCM
//! - `md5` - streaming MD5 for in-memory data, streams and large files
//!
//! ## Example
//!
//! ```no_run
//! use cryptkit::{Cipher, Cryptkit, Mode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let key = Cipher::generate_key(256)?;
//! let iv = Cipher::generate_iv(Mode::Cbc)?;
//!
//! let ciphertext = Cryptkit::cipher()
//!     .aes()
//!     .with_key(key.clone())
//!     .with_iv(iv.clone())
//!     .on_result(|result| match result {
//!         Ok(ciphertext) => ciphertext,
//!         Err(e) => {
//!             eprintln!("Encryption error: {e}");
//!             Vec::new()
//!         }
//!     })
//!     .encrypt("Hello, World!")
//!     .await;
//!
//! let decrypted = Cryptkit::cipher()
//!     .aes()
//!     .with_key(key)
//!     .with_iv(iv)
//!     .decrypt(ciphertext)
//!     .await?;
//! assert_eq!(decrypted, b"Hello, World!");
//!
//! let digest = Cryptkit::hash().md5().compute("Hello, World!");
//! println!("{}", digest.to_hex());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod master;

pub use master::Cryptkit;

#[cfg(feature = "aes")]
pub use master::CipherMasterBuilder;

#[cfg(feature = "md5")]
pub use master::HashMasterBuilder;

// === Core Re-exports ===

pub use cryptkit_common::{BufferedBlockProcessor, LoggingTransformer, WordArray, WordArrayError};

// === Cipher Re-exports ===

#[cfg(feature = "aes")]
#[cfg_attr(docsrs, doc(cfg(feature = "aes")))]
pub use cryptkit_cipher::{
    AesBuilder, AesConfig, AesWithKey, Backend, Cipher, CipherError, CipherInput, Encoded, Mode,
    OutputEncoding, PaddingScheme,
};

#[cfg(feature = "aes")]
#[cfg_attr(docsrs, doc(cfg(feature = "aes")))]
pub use cryptkit_cipher as cipher;

// === Hashing Re-exports ===

#[cfg(feature = "md5")]
#[cfg_attr(docsrs, doc(cfg(feature = "md5")))]
pub use cryptkit_hashing::{Hash, HashConfig, HashError, HashInput, HashResult, md5_hex};

#[cfg(feature = "md5")]
#[cfg_attr(docsrs, doc(cfg(feature = "md5")))]
pub use cryptkit_hashing as hashing;
