//! Cryptographic functions for the holdings screen
//!
//! Provides AES-256-GCM cell encryption with a base64 key taken from the
//! environment, and the column adapter that opens a protected dataset.

pub mod columns;
pub mod encryption;
pub mod key;

pub use columns::{decrypt_columns, encrypt_columns};
pub use encryption::{decrypt_cell, encrypt_cell};
pub use key::DatasetKey;
