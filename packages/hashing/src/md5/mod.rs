//! MD5 (RFC 1321)
//!
//! MD5 is broken for collision resistance. It is provided for checksums
//! and interoperability, not for security decisions.

mod hasher;
mod state;

pub use hasher::Md5;
pub use state::Md5State;

/// Compression block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 16;

/// Raw 128-bit digest
pub type Md5Digest = [u8; DIGEST_SIZE];

/// Lowercase hex MD5 of `data`; text is hashed as UTF-8
#[must_use]
pub fn md5_hex(data: impl Into<cryptkit_common::WordArray>) -> String {
    hex::encode(Md5::digest(data))
}
