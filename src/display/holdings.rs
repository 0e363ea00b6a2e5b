//! Holdings table display
//!
//! Renders the filtered table for the terminal with `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::NumberLocale;
use crate::models::{HoldingsTable, InvestmentRecord};

use super::format::format_money;

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "OBS")]
    marker: &'static str,
    #[tabled(rename = "Kommune")]
    area: String,
    #[tabled(rename = "Værdipapirets navn")]
    security_name: String,
    #[tabled(rename = "Markedsværdi (DKK)")]
    market_value: String,
    #[tabled(rename = "Årsag til eksklusion")]
    reason: String,
    #[tabled(rename = "Årsagskategori")]
    category: String,
    #[tabled(rename = "Type")]
    security_type: String,
    #[tabled(rename = "ISIN kode")]
    isin: String,
    #[tabled(rename = "Udsteder")]
    issuer: String,
}

impl HoldingRow {
    fn from_record(record: &InvestmentRecord, locale: &NumberLocale, max_text: usize) -> Self {
        Self {
            marker: record.severity.marker(),
            area: record.area.clone(),
            security_name: truncate(&record.security_name, max_text),
            market_value: format_money(record.market_value, locale),
            reason: truncate(&record.reason, max_text),
            category: record.category.clone(),
            security_type: record.security_type.clone(),
            isin: record.isin.clone(),
            issuer: truncate(&record.issuer, max_text),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Format up to `limit` holdings as a table
pub fn format_holdings_table(
    table: &HoldingsTable,
    locale: &NumberLocale,
    limit: Option<usize>,
) -> String {
    if table.is_empty() {
        return "Der er ingen værdipapirer/investeringer.".to_string();
    }

    let shown = limit.unwrap_or(table.len()).min(table.len());
    let rows: Vec<HoldingRow> = table
        .iter()
        .take(shown)
        .map(|r| HoldingRow::from_record(r, locale, 40))
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    if shown < table.len() {
        output.push_str(&format!(
            "\n… {} of {} rows shown (use --limit to see more)",
            shown,
            table.len()
        ));
    }
    output
}
