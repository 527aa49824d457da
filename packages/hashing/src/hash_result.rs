//! Digest value with encoding support

use crate::md5::Md5Digest;

/// A finished digest tagged with the algorithm that produced it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: &'static str,
    bytes: Vec<u8>,
}

impl HashResult {
    /// Create a result from raw digest bytes
    #[must_use]
    pub fn new(algorithm: &'static str, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// Wrap an MD5 digest
    #[must_use]
    pub fn md5(digest: Md5Digest) -> Self {
        Self::new("md5", digest.to_vec())
    }

    /// Algorithm label, e.g. `"md5"`
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Get the raw bytes of the hash
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex of the digest
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Compare against a hex digest, ignoring case and surrounding whitespace
    #[must_use]
    pub fn matches_hex(&self, expected: &str) -> bool {
        hex::decode(expected.trim()).is_ok_and(|bytes| bytes == self.bytes)
    }

    /// Get the length of the hash in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the hash is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_compare() {
        let result = HashResult::md5([0xAB; 16]);
        assert_eq!(result.algorithm(), "md5");
        assert_eq!(result.len(), 16);
        assert_eq!(result.to_string(), "ab".repeat(16));
        assert!(result.matches_hex(&"AB".repeat(16)));
        assert!(!result.matches_hex("not hex"));
    }
}
