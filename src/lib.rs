//! holdings-screen - Screening of public-sector securities holdings
//!
//! This library loads an encrypted dataset of securities held by Danish
//! municipalities and regions, filters it by area, free-text search and
//! exclusion category, and summarizes which holdings are flagged as
//! problematic by exclusion lists.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and area classification
//! - `error`: Custom error types
//! - `crypto`: Column decryption with a base64 key from the environment
//! - `models`: Core data models (records, money, severity, area selectors)
//! - `storage`: Dataset sources, the raw table and the shared decrypted table
//! - `services`: Lookups, the filter pipeline, narratives and links
//! - `reports`: Aggregates over a filtered table
//! - `display`: Terminal formatting
//! - `export`: XLSX, CSV and JSON export
//! - `cli`: Command handlers for the `holdings` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use holdings_screen::crypto::DatasetKey;
//! use holdings_screen::models::AreaSelector;
//! use holdings_screen::services::FilterQuery;
//! use holdings_screen::storage::{load_holdings, CsvFileSource};
//!
//! let key = DatasetKey::from_env("HOLDINGS_ENCRYPTION_KEY")?;
//! let table = load_holdings(&CsvFileSource::new("holdings.csv"), &key, &columns)?;
//! let query = FilterQuery::new(AreaSelector::AllMunicipalities).with_search("kul");
//! let filtered = query.apply(&table, &settings.area_classification);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HoldingsError, HoldingsResult};
