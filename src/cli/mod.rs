//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dataset;
pub mod export;
pub mod holdings;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{HoldingsPaths, Settings};
use crate::crypto::DatasetKey;
use crate::error::{HoldingsError, HoldingsResult};
use crate::models::{AreaSelector, HoldingsTable};
use crate::services::distinct_areas;
use crate::storage::{load_holdings, CsvFileSource, SharedTable};

pub use dataset::{handle_dataset_command, DatasetCommands};
pub use export::{handle_export_command, ExportArgs};
pub use holdings::{handle_areas_command, handle_categories_command, handle_show_command, ShowArgs};

/// The decrypted dataset, loaded once per process
static HOLDINGS: SharedTable = SharedTable::new();

/// Paths, settings and overrides shared by every command
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: HoldingsPaths,
    pub settings: Settings,
    dataset_override: Option<PathBuf>,
}

impl AppContext {
    pub fn new(paths: HoldingsPaths, settings: Settings, dataset_override: Option<PathBuf>) -> Self {
        Self {
            paths,
            settings,
            dataset_override,
        }
    }

    /// The dataset file in effect: `--dataset`, then settings, then the default
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_override
            .clone()
            .unwrap_or_else(|| self.settings.dataset_path(&self.paths))
    }

    /// Read the dataset key from the configured environment variable
    pub fn key(&self) -> HoldingsResult<DatasetKey> {
        DatasetKey::from_env(&self.settings.key_env_var)
    }

    /// Load the decrypted table, sharing it across calls
    pub fn table(&self) -> HoldingsResult<Arc<HoldingsTable>> {
        HOLDINGS.get_or_load(|| self.load_uncached())
    }

    /// Load the decrypted table without touching the shared cache
    pub fn load_uncached(&self) -> HoldingsResult<HoldingsTable> {
        let key = self.key()?;
        let source = CsvFileSource::new(self.dataset_path());
        load_holdings(&source, &key, &self.settings.encrypted_columns)
    }
}

/// Resolve a command-line area argument against the table
///
/// Synthetic labels match case-insensitively. Named areas are matched
/// case-insensitively too and replaced by their spelling in the data; a
/// name not present in the data is `NotFound`.
pub fn resolve_area(table: &HoldingsTable, label: Option<&str>) -> HoldingsResult<AreaSelector> {
    let selector = AreaSelector::from_label(label.unwrap_or_default());
    let AreaSelector::Named(name) = &selector else {
        return Ok(selector);
    };

    let wanted = name.trim().to_lowercase();
    distinct_areas(table)
        .into_iter()
        .find(|area| !area.is_synthetic() && area.label().to_lowercase() == wanted)
        .ok_or_else(|| HoldingsError::area_not_found(name.as_str()))
}
