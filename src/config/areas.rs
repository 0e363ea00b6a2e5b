//! Municipality / region classification
//!
//! Which group an area belongs to cannot be derived from the rows, so it is
//! configuration: an explicit list of region names and an explicit list of
//! areas that belong to neither group. Every other area is a municipality.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::AreaGroup;

/// The five Danish regions
const DEFAULT_REGIONS: [&str; 5] = [
    "Region Hovedstaden",
    "Region Midtjylland",
    "Region Nordjylland",
    "Region Sjælland",
    "Region Syddanmark",
];

/// Island municipalities without a regional affiliation in the dataset
const DEFAULT_UNAFFILIATED: [&str; 2] = ["Samsø Kommune", "Læsø Kommune"];

/// Lookup deciding the group of each area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaClassification {
    /// Areas in the region group
    #[serde(default)]
    pub regions: BTreeSet<String>,

    /// Areas in neither group; they only appear under the whole country
    #[serde(default)]
    pub unaffiliated: BTreeSet<String>,
}

impl Default for AreaClassification {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
            unaffiliated: DEFAULT_UNAFFILIATED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AreaClassification {
    /// Classification with no regions and no unaffiliated areas
    pub fn empty() -> Self {
        Self {
            regions: BTreeSet::new(),
            unaffiliated: BTreeSet::new(),
        }
    }

    /// Group of a real area name
    pub fn group_of(&self, area: &str) -> AreaGroup {
        if self.regions.contains(area) {
            AreaGroup::Region
        } else if self.unaffiliated.contains(area) {
            AreaGroup::Unaffiliated
        } else {
            AreaGroup::Municipality
        }
    }

    pub fn is_unaffiliated(&self, area: &str) -> bool {
        self.group_of(area) == AreaGroup::Unaffiliated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups() {
        let classification = AreaClassification::default();
        assert_eq!(
            classification.group_of("Region Midtjylland"),
            AreaGroup::Region
        );
        assert_eq!(
            classification.group_of("Samsø Kommune"),
            AreaGroup::Unaffiliated
        );
        assert_eq!(
            classification.group_of("Odense Kommune"),
            AreaGroup::Municipality
        );
    }

    #[test]
    fn test_partial_json_keeps_missing_lists_empty() {
        let classification: AreaClassification =
            serde_json::from_str(r#"{"regions": ["North"]}"#).unwrap();
        assert_eq!(classification.group_of("North"), AreaGroup::Region);
        assert!(classification.unaffiliated.is_empty());
    }
}
