//! Area narratives
//!
//! A narrative is free text about an area's exclusion reasons, generated
//! ahead of time by a language model. The screen only looks texts up by
//! area name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::AreaClassification;
use crate::error::{HoldingsError, HoldingsResult};
use crate::models::AreaSelector;

/// Supplies narrative text for an area
pub trait AreaNarrator {
    fn narrative(&self, area: &str) -> Option<String>;
}

/// Narratives read from a JSON object of `area -> text`
#[derive(Debug, Clone, Default)]
pub struct JsonNarratives {
    texts: BTreeMap<String, String>,
}

impl JsonNarratives {
    pub fn new(texts: BTreeMap<String, String>) -> Self {
        Self { texts }
    }

    /// Load narratives; a missing file means no narratives
    pub fn load(path: &Path) -> HoldingsResult<Self> {
        if !path.exists() {
            log::debug!("No narratives file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            HoldingsError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let texts = serde_json::from_str(&contents).map_err(|e| {
            HoldingsError::Json(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Self { texts })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl AreaNarrator for JsonNarratives {
    fn narrative(&self, area: &str) -> Option<String> {
        self.texts
            .get(area)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Narrative for the current selection
///
/// Only real areas get one, and never the unaffiliated islands.
pub fn narrative_for(
    narrator: &dyn AreaNarrator,
    selector: &AreaSelector,
    classification: &AreaClassification,
) -> Option<String> {
    match selector {
        AreaSelector::Named(area) if !classification.is_unaffiliated(area) => {
            narrator.narrative(area)
        }
        _ => None,
    }
}
