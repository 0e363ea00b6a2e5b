//! Number formatting
//!
//! Locale-aware rendering of market values and the text helpers used by the
//! terminal report.

use crate::config::NumberLocale;
use crate::models::Money;

const MILLION: f64 = 1_000_000.0;

/// Render a number with the locale's thousands and decimal separators
///
/// ```
/// use holdings_screen::config::NumberLocale;
/// use holdings_screen::display::format_number_locale;
///
/// assert_eq!(format_number_locale(1234567.891, 2, &NumberLocale::DANISH), "1.234.567,89");
/// ```
pub fn format_number_locale(value: f64, decimals: usize, locale: &NumberLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(locale.thousands_separator);
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// A market value with two decimals, e.g. "1.500.000,50"
pub fn format_money(amount: Money, locale: &NumberLocale) -> String {
    format_number_locale(amount.as_f64(), 2, locale)
}

/// Human-readable magnitude of a market value
///
/// At or above one million kroner: one decimal and " mio." ("12,3 mio.").
/// Below: whole kroner with thousands separators ("950.000").
pub fn round_to_million(amount: Money, locale: &NumberLocale) -> String {
    let kroner = amount.as_f64();
    if kroner.abs() >= MILLION {
        format!("{} mio.", format_number_locale(kroner / MILLION, 1, locale))
    } else {
        format_number_locale(kroner, 0, locale)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64, locale: &NumberLocale) -> String {
    let decimals = if pct > 0.0 && pct < 0.1 {
        2
    } else if pct < 10.0 {
        1
    } else {
        0
    };
    format!("{}%", format_number_locale(pct, decimals, locale))
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DK: NumberLocale = NumberLocale::DANISH;

    #[test]
    fn test_format_number_locale() {
        assert_eq!(format_number_locale(0.0, 0, &DK), "0");
        assert_eq!(format_number_locale(999.0, 0, &DK), "999");
        assert_eq!(format_number_locale(1000.0, 0, &DK), "1.000");
        assert_eq!(format_number_locale(1234567.891, 2, &DK), "1.234.567,89");
        assert_eq!(format_number_locale(-1234.5, 1, &DK), "-1.234,5");
        assert_eq!(
            format_number_locale(1234567.891, 2, &NumberLocale::ENGLISH),
            "1,234,567.89"
        );
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number_locale(-0.001, 2, &DK), "0,00");
    }

    #[test]
    fn test_round_to_million() {
        assert_eq!(round_to_million(Money::from_kroner(12_345_678), &DK), "12,3 mio.");
        assert_eq!(round_to_million(Money::from_kroner(1_000_000), &DK), "1,0 mio.");
        assert_eq!(round_to_million(Money::from_kroner(950_000), &DK), "950.000");
        assert_eq!(round_to_million(Money::zero(), &DK), "0");
        assert_eq!(
            round_to_million(Money::from_kroner(2_500_000_000), &DK),
            "2.500,0 mio."
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::from_ore(150_000_050), &DK), "1.500.000,50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(75.0, &DK), "75%");
        assert_eq!(format_percentage(2.5, &DK), "2,5%");
        assert_eq!(format_percentage(0.05, &DK), "0,05%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
    }
}
