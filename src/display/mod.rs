//! Display formatting for terminal output
//!
//! Provides number formatting for the target locale and the text rendering
//! of the holdings table and summary.

pub mod format;
pub mod holdings;
pub mod report;

pub use format::{format_money, format_number_locale, round_to_million};
pub use holdings::format_holdings_table;
pub use report::{
    format_area_count, format_heading, format_links, format_narrative, format_summary,
    format_type_breakdown,
};
