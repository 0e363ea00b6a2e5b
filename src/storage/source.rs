//! Dataset sources
//!
//! Where the raw, still-encrypted table comes from is not the core's concern;
//! it only needs something implementing [`DatasetSource`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{HoldingsError, HoldingsResult};

use super::RawTable;

/// Supplies the raw dataset
pub trait DatasetSource {
    /// Fetch the raw table, protected columns still encrypted
    fn fetch_raw(&self) -> HoldingsResult<RawTable>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// A CSV file on local disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvFileSource {
    fn fetch_raw(&self) -> HoldingsResult<RawTable> {
        if !self.path.exists() {
            return Err(HoldingsError::Io(format!(
                "Dataset not found: {}",
                self.path.display()
            )));
        }

        let file = File::open(&self.path).map_err(|e| {
            HoldingsError::Io(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        RawTable::read_csv(BufReader::new(file))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A table already in memory
#[derive(Debug, Clone)]
pub struct InMemorySource {
    table: RawTable,
}

impl InMemorySource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }
}

impl DatasetSource for InMemorySource {
    fn fetch_raw(&self) -> HoldingsResult<RawTable> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory table ({} rows)", self.table.len())
    }
}
