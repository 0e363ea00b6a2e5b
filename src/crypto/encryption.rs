//! AES-256-GCM cell encryption/decryption
//!
//! Each protected cell is stored as `base64(nonce || ciphertext)`, where the
//! ciphertext carries the GCM authentication tag. Every encryption draws a
//! fresh nonce, so equal plaintexts produce different cells.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{HoldingsError, HoldingsResult};

use super::DatasetKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes
const TAG_SIZE: usize = 16;

fn cipher(key: &DatasetKey) -> HoldingsResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| HoldingsError::Config(format!("Failed to create cipher: {}", e)))
}

/// Encrypt one cell value
pub fn encrypt_cell(plaintext: &str, key: &DatasetKey) -> HoldingsResult<String> {
    let cipher = cipher(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| HoldingsError::Serialization(format!("Encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(blob))
}

/// Decrypt one cell value
pub fn decrypt_cell(encoded: &str, key: &DatasetKey) -> HoldingsResult<String> {
    let blob = STANDARD
        .decode(encoded.trim())
        .map_err(|e| HoldingsError::Decryption(format!("Invalid ciphertext encoding: {}", e)))?;

    if blob.len() < NONCE_SIZE + TAG_SIZE {
        return Err(HoldingsError::Decryption(format!(
            "Ciphertext too short: {} bytes",
            blob.len()
        )));
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher(key)?.decrypt(nonce, ciphertext).map_err(|_| {
        HoldingsError::Decryption("Decryption failed: invalid key or corrupted data".to_string())
    })?;

    String::from_utf8(plaintext)
        .map_err(|e| HoldingsError::Decryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
}
