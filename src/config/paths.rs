//! Path management for the holdings screen
//!
//! ## Path Resolution Order
//!
//! 1. `HOLDINGS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/holdings-screen` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::HoldingsError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "HOLDINGS_DATA_DIR";

/// Manages all paths used by the holdings screen
#[derive(Debug, Clone)]
pub struct HoldingsPaths {
    /// Base directory for configuration and data
    base_dir: PathBuf,
}

impl HoldingsPaths {
    /// Create a new HoldingsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override is not set.
    pub fn new() -> Result<Self, HoldingsError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create HoldingsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exported files (<base>/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the encrypted dataset
    pub fn dataset_file(&self) -> PathBuf {
        self.data_dir().join("holdings.csv")
    }

    /// Get the path to the pre-generated area narratives
    pub fn narratives_file(&self) -> PathBuf {
        self.data_dir().join("narratives.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), HoldingsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HoldingsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HoldingsError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| HoldingsError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, HoldingsError> {
    ProjectDirs::from("", "", "holdings-screen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            HoldingsError::Config(format!(
                "Could not determine a home directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
