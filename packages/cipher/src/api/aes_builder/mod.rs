//! AES builders

mod builder_types;
mod decrypt_operations;
mod encrypt_operations;

pub use builder_types::{AesBuilder, AesWithKey, AesWithKeyAndHandler};
