//! Area selection and grouping
//!
//! An [`AreaSelector`] is what the user picks in the area dropdown: either a
//! real area name or one of three synthetic values. Which group a real area
//! belongs to is decided by [`AreaClassification`](crate::config::AreaClassification).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the selector meaning every row
pub const WHOLE_COUNTRY_LABEL: &str = "Hele landet";
/// Label of the selector meaning every municipality
pub const ALL_MUNICIPALITIES_LABEL: &str = "Alle kommuner";
/// Label of the selector meaning every region
pub const ALL_REGIONS_LABEL: &str = "Alle regioner";

/// Group an area belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaGroup {
    Municipality,
    Region,
    /// In neither group, e.g. single-municipality islands
    Unaffiliated,
}

/// A value of the area dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AreaSelector {
    /// All rows, including unaffiliated areas
    #[default]
    WholeCountry,
    AllMunicipalities,
    AllRegions,
    /// A single real area
    Named(String),
}

impl AreaSelector {
    /// Create a selector for a real area
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The text shown in the dropdown and used in export file names
    pub fn label(&self) -> &str {
        match self {
            AreaSelector::WholeCountry => WHOLE_COUNTRY_LABEL,
            AreaSelector::AllMunicipalities => ALL_MUNICIPALITIES_LABEL,
            AreaSelector::AllRegions => ALL_REGIONS_LABEL,
            AreaSelector::Named(name) => name,
        }
    }

    /// True for the three synthetic values
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, AreaSelector::Named(_))
    }

    /// Parse a dropdown label. Anything that is not a synthetic label is a
    /// real area name; an empty label selects the whole country.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(WHOLE_COUNTRY_LABEL) {
            AreaSelector::WholeCountry
        } else if label.eq_ignore_ascii_case(ALL_MUNICIPALITIES_LABEL) {
            AreaSelector::AllMunicipalities
        } else if label.eq_ignore_ascii_case(ALL_REGIONS_LABEL) {
            AreaSelector::AllRegions
        } else {
            AreaSelector::Named(label.to_string())
        }
    }
}

impl fmt::Display for AreaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AreaSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AreaSelector::from_label(s))
    }
}
