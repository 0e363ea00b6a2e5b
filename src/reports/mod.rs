//! Reports module
//!
//! Aggregates over a filtered holdings table: counts, market value totals,
//! the severity split and the breakdown by security type.

pub mod summary;

pub use summary::{
    count, distinct_area_count, market_value_by_type, problematic_counts,
    problematic_market_value, sum_market_value, ProblemCounts, Summary, TypeShare,
};
