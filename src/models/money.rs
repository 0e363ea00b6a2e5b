//! Money type for market values
//!
//! Internally stores amounts in øre (i64, hundredths of a krone) to avoid
//! floating-point drift when summing hundreds of thousands of positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Largest whole-krone amount representable in øre
const MAX_KRONER: i64 = i64::MAX / 100;

/// A monetary amount stored as øre
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from øre
    ///
    /// # Examples
    /// ```
    /// use holdings_screen::models::Money;
    /// let amount = Money::from_ore(1050); // 10,50 kr.
    /// assert_eq!(amount.kroner(), 10);
    /// ```
    pub const fn from_ore(ore: i64) -> Self {
        Self(ore)
    }

    /// Create a Money amount from whole kroner
    pub const fn from_kroner(kroner: i64) -> Self {
        Self(kroner * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in øre
    pub const fn ore(&self) -> i64 {
        self.0
    }

    /// Get the whole kroner portion (truncated toward zero)
    pub const fn kroner(&self) -> i64 {
        self.0 / 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in kroner as a float, for display and spreadsheet cells
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a market value from a dataset cell
    ///
    /// Accepts "1234.56", "1234,56", "1234", "-12.5" and scientific notation
    /// such as "1.5e6" as written by some spreadsheet tools. An empty cell is
    /// zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::zero());
        }

        // A lone comma is a decimal comma
        let normalized = if s.contains(',') && !s.contains('.') {
            s.replace(',', ".")
        } else {
            s.to_string()
        };

        if normalized.contains(['e', 'E']) {
            let value: f64 = normalized
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
            if !value.is_finite() || value.abs() > MAX_KRONER as f64 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            return Ok(Self((value * 100.0).round() as i64));
        }

        let (negative, digits) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        // Round half up on the third decimal
        let mut ore: i64 = match fraction.len() {
            0 => 0,
            1 => fraction[..1].parse::<i64>().unwrap_or(0) * 10,
            _ => fraction[..2].parse::<i64>().unwrap_or(0),
        };
        if fraction.len() > 2 && fraction.as_bytes()[2] >= b'5' {
            ore += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(ore))
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.0.abs() / 100, self.0.abs() % 100)
    }
}

// Addition saturates so aggregates over any dataset stay total
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid market value: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_point() {
        assert_eq!(Money::parse("1234.56").unwrap().ore(), 123456);
        assert_eq!(Money::parse("10.5").unwrap().ore(), 1050);
        assert_eq!(Money::parse(".25").unwrap().ore(), 25);
    }

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(Money::parse("1234,56").unwrap().ore(), 123456);
    }

    #[test]
    fn test_parse_integer_and_empty() {
        assert_eq!(Money::parse("1000").unwrap(), Money::from_kroner(1000));
        assert_eq!(Money::parse("  ").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rounds_third_decimal() {
        assert_eq!(Money::parse("0.125").unwrap().ore(), 13);
        assert_eq!(Money::parse("0.124").unwrap().ore(), 12);
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(Money::parse("1.5e6").unwrap(), Money::from_kroner(1_500_000));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Money::parse("-12.50").unwrap().ore(), -1250);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.3x").is_err());
        assert!(Money::parse("-").is_err());
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_ore(150), Money::from_ore(250)];
        let total: Money = values.iter().sum();
        assert_eq!(total.ore(), 400);
        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse_out_of_range_scientific() {
        assert!(Money::parse("1e20").is_err());
        assert!(Money::parse("-1e20").is_err());
        assert!(Money::parse("100000000000000000000").is_err());
        assert_eq!(Money::parse("9e16").unwrap().kroner(), 90_000_000_000_000_000);
    }

    #[test]
    fn test_parse_rejects_repeated_sign() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-+5").is_err());
        assert!(Money::parse("+5").is_err());
    }

    #[test]
    fn test_sum_saturates() {
        let values = [Money::from_ore(i64::MAX - 10), Money::from_ore(100)];
        let total: Money = values.iter().sum();
        assert_eq!(total.ore(), i64::MAX);

        let mut acc = Money::from_ore(i64::MIN + 1);
        acc += Money::from_ore(-100);
        assert_eq!(acc.ore(), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_ore(123456).to_string(), "1234.56");
        assert_eq!(Money::from_ore(-5).to_string(), "-0.05");
    }
}
