//! The symmetric dataset key
//!
//! The key is a 32-byte AES-256 key supplied base64-encoded through an
//! environment variable. It is zeroed on drop and never printed.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{HoldingsError, HoldingsResult};

/// Key length for AES-256
pub const KEY_SIZE: usize = 32;

/// Key used to decrypt the protected dataset columns
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DatasetKey {
    key: [u8; KEY_SIZE],
}

impl DatasetKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: &[u8]) -> HoldingsResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(HoldingsError::Config(format!(
                "Dataset key must be {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Decode a base64-encoded key
    pub fn from_base64(encoded: &str) -> HoldingsResult<Self> {
        let mut bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| HoldingsError::Config(format!("Dataset key is not valid base64: {}", e)))?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Read and decode the key from an environment variable
    ///
    /// A missing or empty variable is a configuration error.
    pub fn from_env(var: &str) -> HoldingsResult<Self> {
        let mut encoded = std::env::var(var)
            .map_err(|_| HoldingsError::Config(format!("{} is not set in the environment", var)))?;
        if encoded.trim().is_empty() {
            encoded.zeroize();
            return Err(HoldingsError::Config(format!("{} is empty", var)));
        }
        let key = Self::from_base64(&encoded);
        encoded.zeroize();
        key
    }

    /// Generate a fresh random key
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Encode the key for storing in the environment
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.key)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Don't print the key in Debug output
impl fmt::Debug for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatasetKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let key = DatasetKey::generate();
        let decoded = DatasetKey::from_base64(&key.to_base64()).unwrap();
        assert_eq!(key.as_bytes(), decoded.as_bytes());
    }

    #[test]
    fn test_generated_keys_differ() {
        assert_ne!(
            DatasetKey::generate().as_bytes(),
            DatasetKey::generate().as_bytes()
        );
    }

    #[test]
    fn test_malformed_base64_is_config_error() {
        let err = DatasetKey::from_base64("not base64!!").unwrap_err();
        assert!(matches!(err, HoldingsError::Config(_)));
    }

    #[test]
    fn test_wrong_length_is_config_error() {
        let err = DatasetKey::from_base64(&STANDARD.encode([1u8; 16])).unwrap_err();
        assert!(matches!(err, HoldingsError::Config(_)));
    }

    #[test]
    fn test_missing_env_var_is_config_error() {
        let err = DatasetKey::from_env("HOLDINGS_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, HoldingsError::Config(_)));
        assert!(err.to_string().contains("HOLDINGS_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = DatasetKey::from_bytes(&[7u8; KEY_SIZE]).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains('7'));
    }
}
