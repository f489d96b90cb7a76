//! # Money Module
//!
//! Provides the `Money` type for asset values.
//!
//! The asset form submits free currency text (`"$1,200"`, `"999"`,
//! `"12.50"`). It is parsed once into integer cents and formatted back for
//! display, so totals on the dashboard never go through floating point.
//!
//! ## Usage
//! ```rust
//! use inlin_core::money::Money;
//!
//! let laptop = Money::parse("$1,200").unwrap();
//! assert_eq!(laptop.cents(), 120_000);
//! assert_eq!(laptop.display("$"), "$1,200");
//!
//! let total = laptop + Money::from_cents(99_900);
//! assert_eq!(total.display("$"), "$2,199");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::MAX_ASSET_VALUE;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary value in the smallest currency unit (cents).
///
/// Serialized as the bare cent count; display formatting is a view concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_whole(units: i64) -> Self {
        Money(units * 100)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Parses currency text from the asset form.
    ///
    /// ## Accepted Input
    /// - At most one leading currency symbol such as `$` or `€`
    /// - Digits with optional `,` thousands separators (`.50` means 0.50)
    /// - Optional `.` followed by one or two decimal digits
    /// - Up to [`MAX_ASSET_VALUE`] whole units
    ///
    /// Negative amounts, letters, and anything else are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use inlin_core::money::Money;
    ///
    /// assert_eq!(Money::parse("$350").unwrap().cents(), 35_000);
    /// assert_eq!(Money::parse("12.5").unwrap().cents(), 1_250);
    /// assert!(Money::parse("-5").is_err());
    /// assert!(Money::parse("lots").is_err());
    /// assert_eq!(Money::parse("$.99").unwrap().cents(), 99);
    /// ```
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        let invalid = |reason: String| ValidationError::invalid_format("value", reason);

        let text = input.trim();
        if text.is_empty() {
            return Err(ValidationError::required("value"));
        }
        if text.contains('-') {
            return Err(invalid("must not be negative".into()));
        }

        let amount = strip_symbol(text).trim_start();
        let amount: String = amount.chars().filter(|c| *c != ',').collect();

        let (whole, fraction) = match amount.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (amount.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected an amount such as $1,200 or 99.50".into()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected an amount such as $1,200 or 99.50".into()));
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places".into()));
        }

        let too_large = || {
            let max = Money::from_whole(MAX_ASSET_VALUE);
            invalid(format!("must not exceed {max}"))
        };

        let whole: i64 = match whole {
            "" => 0,
            digits => digits.parse().map_err(|_| too_large())?,
        };
        if whole > MAX_ASSET_VALUE {
            return Err(too_large());
        }
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        let total = Money(whole * 100 + cents);
        if total > Money::from_whole(MAX_ASSET_VALUE) {
            return Err(too_large());
        }
        Ok(total)
    }

    /// Formats for display with thousands separators.
    ///
    /// Whole amounts drop the cents (`"$1,200"`), others keep two places
    /// (`"$12.50"`).
    pub fn display(&self, symbol: &str) -> String {
        let digits = self.whole().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if self.cents_part() == 0 {
            format!("{symbol}{grouped}")
        } else {
            format!("{symbol}{grouped}.{:02}", self.cents_part())
        }
    }
}

/// Drops one leading currency symbol, if present. Letters are not symbols.
fn strip_symbol(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if !c.is_alphanumeric() && !c.is_whitespace() && c != '.' && c != ',' => {
            chars.as_str()
        }
        _ => text,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_values() {
        assert_eq!(Money::parse("$1,200").unwrap(), Money::from_whole(1200));
        assert_eq!(Money::parse("$999").unwrap(), Money::from_whole(999));
        assert_eq!(Money::parse("$350").unwrap(), Money::from_whole(350));
        assert_eq!(Money::parse("  $800 ").unwrap(), Money::from_whole(800));
    }

    #[test]
    fn test_parse_decimals() {
        assert_eq!(Money::parse("12.50").unwrap().cents(), 1250);
        assert_eq!(Money::parse("12.5").unwrap().cents(), 1250);
        assert_eq!(Money::parse("0.07").unwrap().cents(), 7);
        assert!(Money::parse("1.234").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("-$5").is_err());
        assert!(Money::parse("$12a").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_symbol_prefix() {
        assert_eq!(Money::parse(".50").unwrap().cents(), 50);
        assert_eq!(Money::parse("$.99").unwrap().cents(), 99);
        assert_eq!(Money::parse("€ 1,000").unwrap(), Money::from_whole(1000));
        assert!(Money::parse("abc12").is_err());
        assert!(Money::parse("$$12").is_err());
        assert!(Money::parse("$.").is_err());
        assert!(Money::parse("..5").is_err());
    }

    #[test]
    fn test_parse_caps_value() {
        let max = Money::from_whole(MAX_ASSET_VALUE);
        assert_eq!(Money::parse("1000000000").unwrap(), max);
        assert!(Money::parse("1000000000.01").is_err());
        assert!(Money::parse("90000000000000000").is_err());
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::from_cents(i64::MAX), Money::from_whole(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_whole(1200).display("$"), "$1,200");
        assert_eq!(Money::from_whole(999).display("$"), "$999");
        assert_eq!(Money::from_cents(1250).display("€"), "€12.50");
        assert_eq!(Money::from_whole(1_234_567).display("$"), "$1,234,567");
        assert_eq!(Money::zero().to_string(), "$0");
    }

    #[test]
    fn test_sum() {
        let total: Money = [1200, 999, 350, 800]
            .into_iter()
            .map(Money::from_whole)
            .sum();
        assert_eq!(total.display("$"), "$3,349");
    }
}
