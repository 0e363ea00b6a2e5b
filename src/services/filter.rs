//! Filter pipeline
//!
//! Four stages, each a pure function from a table to a new table:
//! area, free-text search, category, and normalization. The first three are
//! row predicates and commute; normalization runs last.

use std::collections::BTreeSet;

use crate::config::AreaClassification;
use crate::models::{AreaGroup, AreaSelector, HoldingsTable, InvestmentRecord};

/// Keep the rows matching an area selector
pub fn filter_by_area(
    table: &HoldingsTable,
    selector: &AreaSelector,
    classification: &AreaClassification,
) -> HoldingsTable {
    match selector {
        AreaSelector::WholeCountry => table.clone(),
        AreaSelector::AllMunicipalities => {
            table.filter(|r| classification.group_of(&r.area) == AreaGroup::Municipality)
        }
        AreaSelector::AllRegions => {
            table.filter(|r| classification.group_of(&r.area) == AreaGroup::Region)
        }
        AreaSelector::Named(name) => table.filter(|r| r.area == *name),
    }
}

/// Case-insensitive substring search over the record's text fields
///
/// An empty query returns the table unchanged.
pub fn filter_by_search(table: &HoldingsTable, query: &str) -> HoldingsTable {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return table.clone();
    }

    table.filter(|r| matches_search(r, &needle))
}

fn matches_search(record: &InvestmentRecord, needle: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep the rows whose category is selected
///
/// An empty selection returns the table unchanged.
pub fn filter_by_category(table: &HoldingsTable, selected: &BTreeSet<String>) -> HoldingsTable {
    if selected.is_empty() {
        return table.clone();
    }

    table.filter(|r| selected.contains(r.category.trim()))
}

/// Canonicalize text fields and sort by area, then security name
pub fn normalize(table: &HoldingsTable) -> HoldingsTable {
    let mut records: Vec<InvestmentRecord> = table
        .iter()
        .map(|r| InvestmentRecord {
            area: r.area.trim().to_string(),
            isin: r.isin.trim().to_uppercase(),
            security_name: r.security_name.trim().to_string(),
            flagged_by: r.flagged_by.trim().to_string(),
            reason: r.reason.trim().to_string(),
            category: r.category.trim().to_string(),
            security_type: r.security_type.trim().to_string(),
            issuer: r.issuer.trim().to_string(),
            ..r.clone()
        })
        .collect();

    records.sort_by(|a, b| {
        a.area
            .cmp(&b.area)
            .then_with(|| a.security_name.cmp(&b.security_name))
    });

    HoldingsTable::new(records)
}

/// The user's current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub area: AreaSelector,
    pub search: String,
    pub categories: BTreeSet<String>,
}

impl FilterQuery {
    pub fn new(area: AreaSelector) -> Self {
        Self {
            area,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories
            .into_iter()
            .map(|c| {
                let c: String = c.into();
                c.trim().to_string()
            })
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    /// Run the full pipeline: area, search, category, then normalize
    pub fn apply(
        &self,
        table: &HoldingsTable,
        classification: &AreaClassification,
    ) -> HoldingsTable {
        let by_area = filter_by_area(table, &self.area, classification);
        let by_search = filter_by_search(&by_area, &self.search);
        let by_category = filter_by_category(&by_search, &self.categories);
        let result = normalize(&by_category);

        log::debug!(
            "Filter area='{}' search='{}' categories={} kept {} of {} rows",
            self.area,
            self.search,
            self.categories.len(),
            result.len(),
            table.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Severity};
    use crate::reports::summary::{count, sum_market_value};

    fn record(area: &str, name: &str, kroner: i64) -> InvestmentRecord {
        InvestmentRecord::new(area, name, Money::from_kroner(kroner))
    }

    fn table() -> HoldingsTable {
        let mut bond = record("Region Hovedstaden", "Russian Federation 2030", 300);
        bond.issuer = "Russian Federation".into();
        bond.security_type = "Obligation".into();

        HoldingsTable::new(vec![
            record("Aarhus Kommune", "Novo Nordisk B", 100)
                .flagged(Severity::None, "", ""),
            record("Samsø Kommune", "Vestas Wind", 10),
            bond.flagged(Severity::CountryBlacklist, "Sanctioned country", "Sanktioner"),
            record("Aarhus Kommune", "Altria Group", 50)
                .flagged(Severity::CompanyBlacklist, "Tobacco production", "Tobak"),
            record("Odense Kommune", "Lockheed Martin", 70)
                .flagged(Severity::Potential, "Controversial weapons", "Våben"),
        ])
    }

    fn classification() -> AreaClassification {
        AreaClassification::default()
    }

    fn areas(t: &HoldingsTable) -> Vec<&str> {
        t.iter().map(|r| r.area.as_str()).collect()
    }

    #[test]
    fn test_named_area() {
        let result = filter_by_area(
            &table(),
            &AreaSelector::named("Aarhus Kommune"),
            &classification(),
        );
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.area == "Aarhus Kommune"));
    }

    #[test]
    fn test_whole_country_keeps_unaffiliated() {
        let result = filter_by_area(&table(), &AreaSelector::WholeCountry, &classification());
        assert_eq!(result.len(), 5);
        assert!(areas(&result).contains(&"Samsø Kommune"));
    }

    #[test]
    fn test_groups_exclude_unaffiliated() {
        let municipalities =
            filter_by_area(&table(), &AreaSelector::AllMunicipalities, &classification());
        let regions = filter_by_area(&table(), &AreaSelector::AllRegions, &classification());

        assert_eq!(municipalities.len(), 3);
        assert_eq!(areas(&regions), vec!["Region Hovedstaden"]);
        assert!(!areas(&municipalities).contains(&"Samsø Kommune"));
        assert!(!areas(&regions).contains(&"Samsø Kommune"));
    }

    #[test]
    fn test_area_filter_is_idempotent() {
        let t = table();
        let c = classification();
        for selector in [
            AreaSelector::WholeCountry,
            AreaSelector::AllMunicipalities,
            AreaSelector::AllRegions,
            AreaSelector::named("Aarhus Kommune"),
            AreaSelector::named("Nowhere"),
        ] {
            let once = filter_by_area(&t, &selector, &c);
            let twice = filter_by_area(&once, &selector, &c);
            assert_eq!(once, twice, "selector {}", selector);
        }
    }

    #[test]
    fn test_empty_search_is_identity() {
        let t = table();
        assert_eq!(filter_by_search(&t, ""), t);
        assert_eq!(filter_by_search(&t, "   "), t);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let t = table();

        // issuer
        let by_issuer = filter_by_search(&t, "russian FEDERATION");
        assert_eq!(by_issuer.len(), 1);

        // reason
        let by_reason = filter_by_search(&t, "tobacco");
        assert_eq!(by_reason.records()[0].security_name, "Altria Group");

        // area
        assert_eq!(filter_by_search(&t, "aarhus").len(), 2);

        // non-ASCII
        assert_eq!(filter_by_search(&t, "SAMSØ").len(), 1);
    }

    #[test]
    fn test_search_results_contain_query() {
        let t = table();
        for query in ["kommune", "an", "weapons", "zzz"] {
            let needle = query.to_lowercase();
            for r in filter_by_search(&t, query).iter() {
                assert!(r
                    .searchable_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle)));
            }
        }
    }

    #[test]
    fn test_empty_category_selection_is_identity() {
        let t = table();
        let result = filter_by_category(&t, &BTreeSet::new());
        assert_eq!(sum_market_value(&result), sum_market_value(&t));
        assert_eq!(result, t);
    }

    #[test]
    fn test_category_filter() {
        let selected: BTreeSet<String> = ["Tobak".to_string(), "Våben".to_string()].into();
        let result = filter_by_category(&table(), &selected);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| selected.contains(&r.category)));
    }

    #[test]
    fn test_normalize_sorts_by_area_then_name() {
        let result = normalize(&table());
        let keys: Vec<(&str, &str)> = result
            .iter()
            .map(|r| (r.area.as_str(), r.security_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Aarhus Kommune", "Altria Group"),
                ("Aarhus Kommune", "Novo Nordisk B"),
                ("Odense Kommune", "Lockheed Martin"),
                ("Region Hovedstaden", "Russian Federation 2030"),
                ("Samsø Kommune", "Vestas Wind"),
            ]
        );
    }

    #[test]
    fn test_normalize_trims_text() {
        let mut r = record("  Aarhus Kommune ", " X ", 1);
        r.isin = " dk0060534915 ".into();
        let result = normalize(&HoldingsTable::new(vec![r]));
        assert_eq!(result.records()[0].area, "Aarhus Kommune");
        assert_eq!(result.records()[0].isin, "DK0060534915");
    }

    #[test]
    fn test_pipeline_does_not_mutate_input() {
        let t = table();
        let before = t.clone();
        let _ = FilterQuery::new(AreaSelector::AllMunicipalities)
            .with_search("kommune")
            .apply(&t, &classification());
        assert_eq!(t, before);
    }

    #[test]
    fn test_pipeline_empty_result() {
        let result = FilterQuery::new(AreaSelector::named("Aarhus Kommune"))
            .with_search("Lockheed")
            .apply(&table(), &classification());
        assert!(result.is_empty());
        assert_eq!(count(&result), 0);
        assert!(sum_market_value(&result).is_zero());
    }

    #[test]
    fn test_scenario_two_areas() {
        let t = HoldingsTable::new(vec![
            record("A", "x1", 1),
            record("B", "y1", 2),
            record("A", "x2", 3),
            record("B", "y2", 4),
            record("A", "x3", 5),
        ]);
        let query = FilterQuery::new(AreaSelector::named("A")).with_search("");
        let result = query.apply(&t, &AreaClassification::empty());

        let expected = t.iter().filter(|r| r.area == "A").count();
        assert_eq!(count(&result), expected);
        assert_eq!(count(&result), 3);
        assert!(result.iter().all(|r| r.area == "A"));
        assert_eq!(sum_market_value(&result), Money::from_kroner(9));
    }

    #[test]
    fn test_selected_categories_are_trimmed() {
        let padded = FilterQuery::default().with_categories([" Tobak ", "", "  "]);
        assert_eq!(padded.categories, BTreeSet::from(["Tobak".to_string()]));

        let exact = FilterQuery::default().with_categories(["Tobak"]);
        let classification = AreaClassification::default();
        let result = padded.apply(&table(), &classification);
        assert!(!result.is_empty());
        assert_eq!(result, exact.apply(&table(), &classification));
    }
}
