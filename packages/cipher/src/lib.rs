//! # Cryptkit Cipher
//!
//! AES-128/192/256 in CBC and GCM modes.
//!
//! ```no_run
//! use cryptkit_cipher::prelude::*;
//!
//! # async fn demo() -> cryptkit_cipher::Result<()> {
//! let key = Cipher::generate_key(256)?;
//! let iv = Cipher::generate_iv(Mode::Cbc)?;
//! let ciphertext = Cipher::aes()
//!     .with_output(OutputEncoding::Hex)
//!     .with_key(key.clone())
//!     .with_iv(iv.clone())
//!     .encrypt("Hello, World!")
//!     .await?;
//! let plaintext = Cipher::aes().with_key(key).with_iv(iv).decrypt(ciphertext).await?;
//! assert_eq!(plaintext, b"Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! The mode engines are usable directly with a [`CipherContext`] when the
//! async facade is not wanted.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod api;
pub mod backend;
pub mod block;
pub mod config;
pub mod context;
pub mod encoded;
pub mod error;
pub mod modes;
pub mod padding;

pub use api::{AesBuilder, AesWithKey, AesWithKeyAndHandler, Cipher};
pub use backend::Backend;
pub use config::AesConfig;
pub use context::CipherContext;
pub use encoded::{CipherInput, Encoded, OutputEncoding};
pub use error::{CipherError, Result};
pub use modes::{Mode, ModeEngine};
pub use padding::{Padding, PaddingScheme};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AesBuilder, AesConfig, AesWithKey, Backend, Cipher, CipherError, Encoded, Mode,
        OutputEncoding, PaddingScheme, Result,
    };
}
