//! Links to the exclusion lists behind flagged holdings
//!
//! The "flagged by" column may name several organizations, separated by
//! commas, semicolons or " og ". Each organization found in the configured
//! link map is returned once.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::HoldingsTable;

/// Organizations named in the table's "flagged by" column
pub fn flagging_organizations(table: &HoldingsTable) -> BTreeSet<String> {
    table
        .iter()
        .flat_map(|r| split_organizations(&r.flagged_by))
        .collect()
}

fn split_organizations(cell: &str) -> Vec<String> {
    cell.replace(" og ", ",")
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `(organization, url)` pairs for every linked organization in the table
pub fn organization_links(
    table: &HoldingsTable,
    links: &BTreeMap<String, String>,
) -> Vec<(String, String)> {
    flagging_organizations(table)
        .into_iter()
        .filter_map(|org| {
            let url = links
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&org))
                .map(|(_, url)| url.clone())?;
            Some((org, url))
        })
        .collect()
}
