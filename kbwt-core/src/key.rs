//! Master key validation and per-block sub-key derivation.

use crate::error::{KbwtError, Result};
use sha2::{Digest, Sha256};

/// Minimum accepted length of a master key, in characters.
pub const MIN_KEY_LEN: usize = 16;
/// Maximum accepted length of a master key, in characters.
pub const MAX_KEY_LEN: usize = 32;

/// A validated master key.
///
/// Construction enforces the length and character-set constraints from the
/// external interface: 16-32 alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterKey(String);

impl MasterKey {
    /// Validate and wrap a raw key string.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let len = raw.chars().count();
        if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&len) {
            return Err(KbwtError::invalid_key(format!(
                "key must be {MIN_KEY_LEN}-{MAX_KEY_LEN} characters, got {len}"
            )));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(KbwtError::invalid_key(
                "key must contain only alphanumeric characters",
            ));
        }
        Ok(Self(raw))
    }

    /// Derive the 32-byte sub-key for a given block index.
    ///
    /// `subkey = SHA-256(utf8(master) ++ "-" ++ ascii(block_index))`.
    pub fn subkey(&self, block_index: u64) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        hasher.update(b"-");
        hasher.update(block_index.to_string().as_bytes());
        hasher.finalize().into()
    }

    /// The validated key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_key() {
        assert!(MasterKey::new("short").is_err());
    }

    #[test]
    fn test_rejects_long_key() {
        let key = "a".repeat(33);
        assert!(MasterKey::new(key).is_err());
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert!(MasterKey::new("abcdefghijklmno-").is_err());
        assert!(MasterKey::new("abcdefghijklmno ").is_err());
    }

    #[test]
    fn test_accepts_boundary_lengths() {
        assert!(MasterKey::new("a".repeat(16)).is_ok());
        assert!(MasterKey::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn test_subkey_deterministic() {
        let key = MasterKey::new("abcdefghijklmnop").unwrap();
        assert_eq!(key.subkey(0), key.subkey(0));
        assert_ne!(key.subkey(0), key.subkey(1));
    }

    #[test]
    fn test_subkey_different_keys_differ() {
        let a = MasterKey::new("abcdefghijklmnop").unwrap();
        let b = MasterKey::new("ponmlkjihgfedcba").unwrap();
        assert_ne!(a.subkey(5), b.subkey(5));
    }
}
