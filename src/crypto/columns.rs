//! Column-level decryption adapter
//!
//! Decrypts (or seals) a fixed set of named columns of a [`RawTable`],
//! leaving every other column untouched. Either the whole table is converted
//! or an error is returned; a partially decrypted table never escapes.

use crate::error::{HoldingsError, HoldingsResult};
use crate::storage::RawTable;

use super::{decrypt_cell, encrypt_cell, DatasetKey};

fn resolve_columns(raw: &RawTable, columns: &[String]) -> HoldingsResult<Vec<usize>> {
    columns
        .iter()
        .map(|name| {
            raw.column_index(name).ok_or_else(|| {
                HoldingsError::Decryption(format!("Encrypted column '{}' not found", name))
            })
        })
        .collect()
}

/// Decrypt every cell of the named columns
pub fn decrypt_columns(
    raw: &RawTable,
    key: &DatasetKey,
    columns: &[String],
) -> HoldingsResult<RawTable> {
    let indices = resolve_columns(raw, columns)?;

    let mut table = raw.clone();
    for index in indices {
        table = table.map_column(index, |cell| decrypt_cell(cell, key))?;
    }

    log::debug!(
        "Decrypted {} column(s) across {} row(s)",
        columns.len(),
        table.len()
    );
    Ok(table)
}

/// Encrypt every cell of the named columns
pub fn encrypt_columns(
    raw: &RawTable,
    key: &DatasetKey,
    columns: &[String],
) -> HoldingsResult<RawTable> {
    let indices = columns
        .iter()
        .map(|name| {
            raw.column_index(name)
                .ok_or_else(|| HoldingsError::column_not_found(name.as_str()))
        })
        .collect::<HoldingsResult<Vec<_>>>()?;

    let mut table = raw.clone();
    for index in indices {
        table = table.map_column(index, |cell| encrypt_cell(cell, key))?;
    }
    Ok(table)
}
