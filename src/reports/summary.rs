//! Holdings summary
//!
//! Counts and sums over a (filtered) holdings table. Every function is total:
//! an empty table yields zeros and empty lists.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{HoldingsTable, Money, Severity};

/// Number of holdings flagged per colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemCounts {
    /// Issued by a blacklisted company (severity 3)
    pub red: usize,
    /// Issued by a blacklisted country (severity 2)
    pub orange: usize,
    /// Potentially problematic (severity 1)
    pub yellow: usize,
}

impl ProblemCounts {
    /// Red plus orange: the holdings on an actual blacklist
    pub fn blacklisted(&self) -> usize {
        self.red + self.orange
    }
}

/// Market value held in one security type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub security_type: String,
    pub market_value: Money,
    /// Share of the table's total market value, 0-100
    pub percentage: f64,
}

/// Number of holdings
pub fn count(table: &HoldingsTable) -> usize {
    table.len()
}

/// Total market value; zero for an empty table
pub fn sum_market_value(table: &HoldingsTable) -> Money {
    table.iter().map(|r| r.market_value).sum()
}

/// Holdings per severity colour
pub fn problematic_counts(table: &HoldingsTable) -> ProblemCounts {
    table
        .iter()
        .fold(ProblemCounts::default(), |mut counts, r| {
            match r.severity {
                Severity::CompanyBlacklist => counts.red += 1,
                Severity::CountryBlacklist => counts.orange += 1,
                Severity::Potential => counts.yellow += 1,
                Severity::None => {}
            }
            counts
        })
}

/// Market value of holdings on a company or country blacklist
pub fn problematic_market_value(table: &HoldingsTable) -> Money {
    table
        .iter()
        .filter(|r| r.severity.is_blacklisted())
        .map(|r| r.market_value)
        .sum()
}

/// Number of distinct areas in the table
pub fn distinct_area_count(table: &HoldingsTable) -> usize {
    table
        .iter()
        .map(|r| r.area.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Market value grouped by security type, largest first
///
/// Rows without a type are grouped under "Ukendt".
pub fn market_value_by_type(table: &HoldingsTable) -> Vec<TypeShare> {
    let mut by_type: BTreeMap<&str, Money> = BTreeMap::new();
    for r in table.iter() {
        let key = match r.security_type.trim() {
            "" => "Ukendt",
            t => t,
        };
        *by_type.entry(key).or_default() += r.market_value;
    }

    let total = sum_market_value(table);
    let mut shares: Vec<TypeShare> = by_type
        .into_iter()
        .map(|(security_type, market_value)| TypeShare {
            security_type: security_type.to_string(),
            market_value,
            percentage: if total.is_zero() {
                0.0
            } else {
                market_value.ore() as f64 / total.ore() as f64 * 100.0
            },
        })
        .collect();

    // Ties keep alphabetical order from the map
    shares.sort_by(|a, b| b.market_value.cmp(&a.market_value));
    shares
}

/// All key figures for one filtered view
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub investments: usize,
    pub total_market_value: Money,
    pub problematic_market_value: Money,
    pub problem_counts: ProblemCounts,
    pub area_count: usize,
    pub by_type: Vec<TypeShare>,
}

impl Summary {
    pub fn compute(table: &HoldingsTable) -> Self {
        Self {
            investments: count(table),
            total_market_value: sum_market_value(table),
            problematic_market_value: problematic_market_value(table),
            problem_counts: problematic_counts(table),
            area_count: distinct_area_count(table),
            by_type: market_value_by_type(table),
        }
    }
}
