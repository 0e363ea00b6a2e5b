//! Severity ranking of a holding
//!
//! Ordered so that a more problematic holding compares greater:
//! `CompanyBlacklist > CountryBlacklist > Potential > None`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How problematic a security is, stored in the `Priority` column as 0..=3
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Not flagged by any list
    #[default]
    None,
    /// Potentially controversial (yellow)
    Potential,
    /// Issued by a blacklisted country (orange)
    CountryBlacklist,
    /// Issued by a blacklisted company (red)
    CompanyBlacklist,
}

impl Severity {
    /// The numeric rank written in the dataset
    pub const fn rank(self) -> u8 {
        match self {
            Severity::None => 0,
            Severity::Potential => 1,
            Severity::CountryBlacklist => 2,
            Severity::CompanyBlacklist => 3,
        }
    }

    /// Parse a rank from a dataset cell; empty cells are `None`
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Severity::None);
        }
        // Some exports write the rank as a float
        let rank: f64 = s
            .parse()
            .map_err(|_| format!("Invalid priority '{}'", s))?;
        if rank.fract() != 0.0 || !(0.0..=3.0).contains(&rank) {
            return Err(format!("Priority out of range: {}", s));
        }
        Severity::try_from(rank as u8)
    }

    /// Blacklisted by country or company
    pub const fn is_blacklisted(self) -> bool {
        matches!(self, Severity::CountryBlacklist | Severity::CompanyBlacklist)
    }

    /// Square marker shown in the `OBS` column
    pub const fn marker(self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Potential => "🟨",
            Severity::CountryBlacklist => "🟧",
            Severity::CompanyBlacklist => "🟥",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::None),
            1 => Ok(Severity::Potential),
            2 => Ok(Severity::CountryBlacklist),
            3 => Ok(Severity::CompanyBlacklist),
            other => Err(format!("Priority out of range: {}", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::None => "None",
            Severity::Potential => "Potentially problematic",
            Severity::CountryBlacklist => "Blacklisted country",
            Severity::CompanyBlacklist => "Blacklisted company",
        };
        write!(f, "{}", label)
    }
}
