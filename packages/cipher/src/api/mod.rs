//! Fluent cipher API
//!
//! Usage: `Cipher::aes().with_key(key).with_iv(iv).encrypt(data).await`

pub mod aes_builder;
mod cipher;

pub use aes_builder::{AesBuilder, AesWithKey, AesWithKeyAndHandler};
pub use cipher::Cipher;
