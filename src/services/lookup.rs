//! Dropdown option helpers
//!
//! Derives the area selector options and the category options from a table.
//! Both are cheap to recompute and carry no state.

use std::collections::BTreeSet;

use crate::models::{AreaSelector, HoldingsTable};

/// Area dropdown options
///
/// The three synthetic selectors come first, followed by every distinct
/// area name in alphabetical order.
pub fn distinct_areas(table: &HoldingsTable) -> Vec<AreaSelector> {
    let names: BTreeSet<&str> = table.iter().map(|r| r.area.as_str()).collect();

    let mut options = Vec::with_capacity(names.len() + 3);
    options.push(AreaSelector::WholeCountry);
    options.push(AreaSelector::AllMunicipalities);
    options.push(AreaSelector::AllRegions);
    options.extend(names.into_iter().map(AreaSelector::named));
    options
}

/// Distinct non-empty exclusion categories
pub fn distinct_categories(table: &HoldingsTable) -> BTreeSet<String> {
    table
        .iter()
        .map(|r| r.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
