//! Investment records and the in-memory holdings table
//!
//! A [`HoldingsTable`] is an immutable, cheaply clonable list of
//! [`InvestmentRecord`]s. Filters build new tables; nothing mutates the rows
//! of a table once it exists.

use serde::Serialize;
use std::sync::Arc;

use super::{Money, Severity};

/// Dataset column headers
pub mod columns {
    pub const AREA: &str = "Kommune";
    pub const ISIN: &str = "ISIN kode";
    pub const SECURITY_NAME: &str = "Værdipapirets navn";
    pub const MARKET_VALUE: &str = "Markedsværdi (DKK)";
    pub const FLAGGED_BY: &str = "Problematisk ifølge:";
    pub const REASON: &str = "Årsag til eksklusion";
    pub const CATEGORY: &str = "Årsagskategori";
    pub const SECURITY_TYPE: &str = "Type";
    pub const ISSUER: &str = "Udsteder";
    pub const PRIORITY: &str = "Priority";
    /// Derived from the priority; never read from the dataset
    pub const MARKER: &str = "OBS";

    /// Columns protected at rest
    pub const ENCRYPTED: [&str; 3] = [AREA, ISIN, SECURITY_NAME];

    /// Columns written by every export, in order. The priority is internal
    /// and never exported.
    pub const EXPORT: [&str; 10] = [
        MARKER,
        AREA,
        SECURITY_NAME,
        MARKET_VALUE,
        FLAGGED_BY,
        REASON,
        CATEGORY,
        SECURITY_TYPE,
        ISIN,
        ISSUER,
    ];
}

/// One security held by one municipality or region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestmentRecord {
    /// Owning municipality or region
    pub area: String,
    /// ISIN-like security identifier
    pub isin: String,
    pub security_name: String,
    pub market_value: Money,
    /// Organizations whose lists flag this security
    pub flagged_by: String,
    /// Exclusion reason text, empty when not flagged
    pub reason: String,
    /// Exclusion reason category, may be empty
    pub category: String,
    /// Equity, bond, ...
    pub security_type: String,
    pub issuer: String,
    pub severity: Severity,
}

impl InvestmentRecord {
    /// Create an unflagged record
    pub fn new(
        area: impl Into<String>,
        security_name: impl Into<String>,
        market_value: Money,
    ) -> Self {
        Self {
            area: area.into(),
            isin: String::new(),
            security_name: security_name.into(),
            market_value,
            flagged_by: String::new(),
            reason: String::new(),
            category: String::new(),
            security_type: String::new(),
            issuer: String::new(),
            severity: Severity::None,
        }
    }

    /// Mark the record as flagged
    pub fn flagged(
        mut self,
        severity: Severity,
        reason: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.severity = severity;
        self.reason = reason.into();
        self.category = category.into();
        self
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.area.trim().is_empty() {
            return Err(RecordValidationError::MissingArea);
        }
        if self.market_value.is_negative() {
            return Err(RecordValidationError::NegativeMarketValue(self.market_value));
        }
        if self.severity != Severity::None && self.reason.trim().is_empty() {
            return Err(RecordValidationError::FlaggedWithoutReason(self.severity));
        }
        if self.severity != Severity::None && self.category.trim().is_empty() {
            return Err(RecordValidationError::FlaggedWithoutCategory(self.severity));
        }
        Ok(())
    }

    /// Text fields searched by the free-text filter
    pub fn searchable_fields(&self) -> [&str; 8] {
        [
            &self.area,
            &self.security_name,
            &self.issuer,
            &self.reason,
            &self.category,
            &self.security_type,
            &self.isin,
            &self.flagged_by,
        ]
    }
}

/// Validation errors for investment records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    MissingArea,
    NegativeMarketValue(Money),
    FlaggedWithoutReason(Severity),
    FlaggedWithoutCategory(Severity),
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArea => write!(f, "Record has no area"),
            Self::NegativeMarketValue(v) => write!(f, "Market value is negative: {}", v),
            Self::FlaggedWithoutReason(s) => {
                write!(f, "Priority {} requires an exclusion reason", s.rank())
            }
            Self::FlaggedWithoutCategory(s) => {
                write!(f, "Priority {} requires a reason category", s.rank())
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Read-only table of investment records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingsTable {
    records: Arc<[InvestmentRecord]>,
}

impl HoldingsTable {
    pub fn new(records: Vec<InvestmentRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[InvestmentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvestmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a new table from the rows matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&InvestmentRecord) -> bool,
    {
        Self::new(self.iter().filter(|r| predicate(r)).cloned().collect())
    }
}

impl Default for HoldingsTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<InvestmentRecord>> for HoldingsTable {
    fn from(records: Vec<InvestmentRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a HoldingsTable {
    type Item = &'a InvestmentRecord;
    type IntoIter = std::slice::Iter<'a, InvestmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let record = InvestmentRecord::new("Aarhus Kommune", "Novo Nordisk B", Money::from_kroner(10))
            .flagged(Severity::CompanyBlacklist, "Tobacco", "Tobak");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_flagged_without_reason() {
        let record = InvestmentRecord::new("Aarhus Kommune", "X", Money::zero()).flagged(
            Severity::Potential,
            "  ",
            "",
        );
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::FlaggedWithoutReason(Severity::Potential))
        );
    }

    #[test]
    fn test_validate_flagged_without_category() {
        let record = InvestmentRecord::new("Aarhus Kommune", "X", Money::zero()).flagged(
            Severity::CompanyBlacklist,
            "Tobacco",
            " ",
        );
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::FlaggedWithoutCategory(Severity::CompanyBlacklist))
        );

        let unflagged = InvestmentRecord::new("Aarhus Kommune", "X", Money::zero()).flagged(
            Severity::None,
            "",
            "Klima",
        );
        assert!(unflagged.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_value() {
        let record = InvestmentRecord::new("Aarhus Kommune", "X", Money::from_ore(-1));
        assert!(matches!(
            record.validate(),
            Err(RecordValidationError::NegativeMarketValue(_))
        ));
    }

    #[test]
    fn test_filter_builds_new_table() {
        let table = HoldingsTable::new(vec![
            InvestmentRecord::new("A", "x", Money::zero()),
            InvestmentRecord::new("B", "y", Money::zero()),
        ]);
        let only_a = table.filter(|r| r.area == "A");
        assert_eq!(only_a.len(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_export_columns_exclude_priority() {
        assert!(!columns::EXPORT.contains(&columns::PRIORITY));
        assert_eq!(columns::EXPORT.len(), 10);
    }
}
