//! User settings for the holdings screen
//!
//! Manages where the dataset lives, which columns are encrypted, how numbers
//! are rendered and how areas are grouped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::areas::AreaClassification;
use super::paths::HoldingsPaths;
use crate::error::HoldingsError;
use crate::models::columns;

/// Default environment variable holding the base64 dataset key
pub const DEFAULT_KEY_ENV: &str = "HOLDINGS_ENCRYPTION_KEY";

/// Thousands and decimal separators used when rendering numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// Danish/European style: 1.234.567,89
    pub const DANISH: NumberLocale = NumberLocale {
        thousands_separator: '.',
        decimal_separator: ',',
    };

    /// English style: 1,234,567.89
    pub const ENGLISH: NumberLocale = NumberLocale {
        thousands_separator: ',',
        decimal_separator: '.',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::DANISH
    }
}

/// Settings for the holdings screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Dataset location; defaults to `<base>/data/holdings.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_file: Option<PathBuf>,

    /// Columns stored encrypted in the dataset
    #[serde(default = "default_encrypted_columns")]
    pub encrypted_columns: Vec<String>,

    /// Name of the environment variable holding the dataset key
    #[serde(default = "default_key_env")]
    pub key_env_var: String,

    #[serde(default)]
    pub number_locale: NumberLocale,

    #[serde(default)]
    pub area_classification: AreaClassification,

    /// Exclusion list publisher -> page describing the list
    #[serde(default)]
    pub organization_links: BTreeMap<String, String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_encrypted_columns() -> Vec<String> {
    columns::ENCRYPTED.iter().map(|c| c.to_string()).collect()
}

fn default_key_env() -> String {
    DEFAULT_KEY_ENV.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dataset_file: None,
            encrypted_columns: default_encrypted_columns(),
            key_env_var: default_key_env(),
            number_locale: NumberLocale::default(),
            area_classification: AreaClassification::default(),
            organization_links: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// The dataset path, honoring the override
    pub fn dataset_path(&self, paths: &HoldingsPaths) -> PathBuf {
        self.dataset_file
            .clone()
            .unwrap_or_else(|| paths.dataset_file())
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &HoldingsPaths) -> Result<Self, HoldingsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HoldingsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HoldingsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HoldingsPaths) -> Result<(), HoldingsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HoldingsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            HoldingsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    fn validate(&self) -> Result<(), HoldingsError> {
        if self.key_env_var.trim().is_empty() {
            return Err(HoldingsError::Config(
                "key_env_var must name an environment variable".into(),
            ));
        }
        let locale = self.number_locale;
        if locale.thousands_separator == locale.decimal_separator {
            return Err(HoldingsError::Config(format!(
                "Thousands and decimal separators must differ (both '{}')",
                locale.decimal_separator
            )));
        }
        Ok(())
    }
}
