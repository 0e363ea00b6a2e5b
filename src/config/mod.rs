//! Configuration module for the holdings screen
//!
//! This module provides configuration management including:
//! - Path resolution for settings, dataset and exports
//! - Settings persistence
//! - The municipality/region classification

pub mod areas;
pub mod paths;
pub mod settings;

pub use areas::AreaClassification;
pub use paths::HoldingsPaths;
pub use settings::{NumberLocale, Settings};
