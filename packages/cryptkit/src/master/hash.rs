//! Hash master builder

/// Master builder for hash operations
#[cfg(feature = "md5")]
pub struct HashMasterBuilder;

#[cfg(feature = "md5")]
impl HashMasterBuilder {
    /// MD5
    #[must_use]
    pub fn md5(self) -> cryptkit_hashing::Md5Builder {
        cryptkit_hashing::Hash::md5()
    }
}
