//! Custom error types for the holdings screen
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Filtering and aggregation never fail, so
//! every variant here belongs to loading, configuration or export.

use thiserror::Error;

/// The main error type for holdings operations
#[derive(Error, Debug)]
pub enum HoldingsError {
    /// Missing or malformed configuration, including the dataset key
    #[error("Configuration error: {0}")]
    Config(String),

    /// A protected cell could not be decrypted; the load is aborted
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// A table could not be written in the requested export format
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A dataset row violates the record invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl HoldingsError {
    /// Create a "not found" error for areas
    pub fn area_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Area",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for dataset columns
    pub fn column_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Column",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors that must stop the program before any data is shown
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Decryption(_))
    }
}

impl From<std::io::Error> for HoldingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HoldingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for HoldingsError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for HoldingsError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for holdings operations
pub type HoldingsResult<T> = Result<T, HoldingsError>;
