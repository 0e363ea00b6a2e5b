//! Summary report formatting
//!
//! Text counterparts of the dashboard widgets: the heading, the problematic
//! counters, the key figures and the type breakdown.

use crate::config::NumberLocale;
use crate::reports::Summary;
use crate::services::FilterQuery;

use super::format::{format_bar, format_percentage, round_to_million, separator};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 24;

/// Heading naming the active selection, e.g. `Data for "Aarhus Kommune" og "kul":`
pub fn format_heading(query: &FilterQuery) -> String {
    let mut parts = vec![format!("\"{}\"", query.area)];
    if !query.categories.is_empty() {
        let joined: Vec<&str> = query.categories.iter().map(String::as_str).collect();
        parts.push(format!("\"{}\"", joined.join(", ")));
    }
    let search = query.search.trim();
    if !search.is_empty() {
        parts.push(format!("\"{}\"", search));
    }

    let selection = match parts.len() {
        1 => parts.remove(0),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("{} og {}", parts.join(", "), last)
        }
    };
    format!("Data for {}:", selection)
}

/// Line counting distinct areas
///
/// Shown for a search within a synthetic area, and for any category filter.
pub fn format_area_count(query: &FilterQuery, summary: &Summary) -> Option<String> {
    let search = query.search.trim();
    let searched_group = query.area.is_synthetic() && !search.is_empty();
    if !searched_group && query.categories.is_empty() {
        return None;
    }
    Some(if search.is_empty() {
        format!(
            "Antal kommuner/regioner, der fremgår efter filtrering: {}",
            summary.area_count
        )
    } else {
        format!(
            "Antal kommuner/regioner, hvor '{}' indgår: {}",
            search, summary.area_count
        )
    })
}

/// Problematic counters and key figures
pub fn format_summary(summary: &Summary, locale: &NumberLocale) -> String {
    let counts = summary.problem_counts;
    let mut output = String::new();

    output.push_str("Antal investeringer udpeget som problematiske\n");
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&format!("  {}\n", counts.blacklisted()));
    output.push_str(&format!(
        "  Heraf 🟥 {} sortlistede selskaber og 🟧 {} statsobligationer fra sortlistede lande.\n",
        counts.red, counts.orange
    ));
    output.push_str(&format!(
        "  Derudover er der 🟨 {} potentielt problematiske værdipapirer.\n",
        counts.yellow
    ));
    output.push('\n');

    output.push_str("Nøgletal\n");
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&format!("  Antal investeringer:        {}\n", summary.investments));
    output.push_str(&format!(
        "  Total markedsværdi (DKK):   {}\n",
        round_to_million(summary.total_market_value, locale)
    ));
    output.push_str(&format!(
        "  Markedsværdi af problematiske investeringer: {}\n",
        round_to_million(summary.problematic_market_value, locale)
    ));

    output
}

/// Market value per security type as horizontal bars
pub fn format_type_breakdown(summary: &Summary, locale: &NumberLocale) -> String {
    if summary.by_type.is_empty() {
        return String::new();
    }

    let name_width = summary
        .by_type
        .iter()
        .map(|s| s.security_type.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let max_value = summary
        .by_type
        .iter()
        .map(|s| s.market_value.as_f64())
        .fold(0.0, f64::max);

    let mut output = String::new();
    output.push_str("Markedsværdi fordelt på type\n");
    output.push_str(&format!("{}\n", separator(WIDTH)));
    for share in &summary.by_type {
        let pad = name_width - share.security_type.chars().count();
        output.push_str(&format!(
            "  {}{}  {}  {:>6}  {}\n",
            share.security_type,
            " ".repeat(pad),
            format_bar(share.market_value.as_f64(), max_value, BAR_WIDTH),
            format_percentage(share.percentage, locale),
            round_to_million(share.market_value, locale)
        ));
    }
    output
}

/// Links to the exclusion lists of the organizations present
pub fn format_links(links: &[(String, String)]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let mut output = String::from("Læs mere om eksklusionslisterne:\n");
    for (org, url) in links {
        output.push_str(&format!("  - {}: {}\n", org, url));
    }
    output
}

/// Narrative section with its disclaimer
pub fn format_narrative(area: &str, text: &str) -> String {
    format!(
        "Eksklusionsårsager for investeringer foretaget af {}:\n{}\n\n\
         ℹ Teksten er genereret med kunstig intelligens og kan indeholde fejl. \
         Listen er muligvis ikke udtømmende.\n",
        area, text
    )
}
