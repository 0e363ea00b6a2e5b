//! Dataset storage layer
//!
//! Fetches the raw dataset from a [`DatasetSource`], opens its protected
//! columns and types it into a [`HoldingsTable`]. The result is cached in a
//! [`SharedTable`] for the rest of the process.

pub mod cache;
pub mod raw_table;
pub mod source;

pub use cache::SharedTable;
pub use raw_table::RawTable;
pub use source::{CsvFileSource, DatasetSource, InMemorySource};

use crate::crypto::{decrypt_columns, DatasetKey};
use crate::error::HoldingsResult;
use crate::models::HoldingsTable;

/// Fetch, decrypt and type the dataset
///
/// Any failure aborts the whole load; no partially decrypted table is
/// returned.
pub fn load_holdings(
    source: &dyn DatasetSource,
    key: &DatasetKey,
    encrypted_columns: &[String],
) -> HoldingsResult<HoldingsTable> {
    log::info!("Loading dataset from {}", source.describe());

    let raw = source.fetch_raw()?;
    let plain = decrypt_columns(&raw, key, encrypted_columns)?;
    let table = plain.to_holdings()?;

    log::info!("Loaded {} holdings", table.len());
    Ok(table)
}
