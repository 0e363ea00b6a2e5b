//! CLI commands for browsing holdings
//!
//! `show` prints the dashboard for one selection; `areas` and `categories`
//! list the values the selection can take.

use clap::Args;

use crate::display::{
    format_area_count, format_heading, format_holdings_table, format_links, format_narrative,
    format_summary, format_type_breakdown,
};
use crate::error::HoldingsResult;
use crate::reports::Summary;
use crate::services::{
    distinct_areas, distinct_categories, narrative_for, organization_links, FilterQuery,
    JsonNarratives,
};

use super::{resolve_area, AppContext};

/// Selection shared by `show` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Area name, "Alle kommuner", "Alle regioner" or "Hele landet" (default)
    pub area: Option<String>,

    /// Case-insensitive free-text search
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Reason category to keep (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,
}

impl SelectionArgs {
    /// Build the filter query, resolving the area against the table
    pub fn to_query(&self, table: &crate::models::HoldingsTable) -> HoldingsResult<FilterQuery> {
        let area = resolve_area(table, self.area.as_deref())?;
        Ok(FilterQuery::new(area)
            .with_search(self.search.as_str())
            .with_categories(self.categories.iter().map(String::as_str)))
    }
}

/// Arguments for `show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Maximum number of table rows to print
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
}

/// Handle `show`
pub fn handle_show_command(ctx: &AppContext, args: ShowArgs) -> HoldingsResult<()> {
    let table = ctx.table()?;
    let query = args.selection.to_query(&table)?;
    let classification = &ctx.settings.area_classification;
    let locale = &ctx.settings.number_locale;

    let filtered = query.apply(&table, classification);
    let summary = Summary::compute(&filtered);

    println!("{}", format_heading(&query));
    println!();
    if let Some(line) = format_area_count(&query, &summary) {
        println!("{}", line);
        println!();
    }
    println!("{}", format_summary(&summary, locale));

    let breakdown = format_type_breakdown(&summary, locale);
    if !breakdown.is_empty() {
        println!("{}", breakdown);
    }

    println!("{}", format_holdings_table(&filtered, locale, Some(args.limit)));

    let links = format_links(&organization_links(
        &filtered,
        &ctx.settings.organization_links,
    ));
    if !links.is_empty() {
        println!();
        print!("{}", links);
    }

    let narratives = JsonNarratives::load(&ctx.paths.narratives_file())?;
    if let Some(text) = narrative_for(&narratives, &query.area, classification) {
        println!();
        print!("{}", format_narrative(query.area.label(), &text));
    }

    Ok(())
}

/// Handle `areas`: synthetic selectors first, then every area in the data
pub fn handle_areas_command(ctx: &AppContext) -> HoldingsResult<()> {
    let table = ctx.table()?;
    for area in distinct_areas(&table) {
        println!("{}", area);
    }
    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command(ctx: &AppContext) -> HoldingsResult<()> {
    let table = ctx.table()?;
    let categories = distinct_categories(&table);
    if categories.is_empty() {
        println!("No reason categories in the dataset.");
    }
    for category in categories {
        println!("{}", category);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaSelector, HoldingsTable, InvestmentRecord, Money, Severity};

    #[test]
    fn test_selection_to_query() {
        let table = HoldingsTable::new(vec![InvestmentRecord::new(
            "Aarhus Kommune",
            "Altria Group",
            Money::from_kroner(1),
        )
        .flagged(Severity::CompanyBlacklist, "Tobacco", "Tobak")]);

        let args = SelectionArgs {
            area: Some("aarhus kommune".into()),
            search: " altria ".into(),
            categories: vec!["Tobak".into()],
        };
        let query = args.to_query(&table).unwrap();
        assert_eq!(query.area, AreaSelector::named("Aarhus Kommune"));
        assert!(query.categories.contains("Tobak"));
        assert_eq!(query.apply(&table, &Default::default()).len(), 1);
    }

    #[test]
    fn test_unknown_area_is_not_found() {
        let args = SelectionArgs {
            area: Some("Atlantis".into()),
            ..Default::default()
        };
        assert!(args.to_query(&HoldingsTable::default()).unwrap_err().is_not_found());
    }
}
