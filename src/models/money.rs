//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Parsing is forgiving about the decoration users type around a
//! number (currency symbols, thousands separators, stray spaces).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbols stripped from user input before parsing
const CURRENCY_SYMBOLS: &[char] = &['$', '₹', '€', '£', '¥'];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract an amount, `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a non-negative money amount from user text
    ///
    /// Strips whitespace, thousands separators (`,` and `_`) and currency
    /// symbols first. Blank input is zero. Nonzero digits past the second
    /// decimal place are rejected.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::parse("₹ 1,200.50").unwrap().cents(), 120050);
    /// assert_eq!(Money::parse("").unwrap().cents(), 0);
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_' && !CURRENCY_SYMBOLS.contains(c))
            .collect();

        if cleaned.is_empty() {
            return Ok(Self::zero());
        }

        let unsigned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
        if unsigned.starts_with('-') {
            return Err(MoneyParseError::Negative);
        }

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(MoneyParseError::InvalidFormat);
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow)?
        };

        if frac.len() > 2 && frac[2..].bytes().any(|b| b != b'0') {
            return Err(MoneyParseError::TooPrecise);
        }

        let cents: i64 = match frac.len() {
            0 => 0,
            1 => i64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => frac[..2].parse().map_err(|_| MoneyParseError::InvalidFormat)?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or(MoneyParseError::Overflow)
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let digits = self.units().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, grouped, self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain two-decimal rendering, as used in exports
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat,
    Negative,
    TooPrecise,
    Overflow,
}

impl MoneyParseError {
    /// Short human-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            MoneyParseError::InvalidFormat => "not a number",
            MoneyParseError::Negative => "must not be negative",
            MoneyParseError::TooPrecise => "more than two decimal places",
            MoneyParseError::Overflow => "amount too large",
        }
    }
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid money amount: {}", self.reason())
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units(10, 50), m);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456789).format_with_symbol("₹"), "₹1,234,567.89");
        assert_eq!(Money::from_cents(99900).format_with_symbol("$"), "$999.00");
        assert_eq!(Money::zero().format_with_symbol(""), "0.00");
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
    }

    #[test]
    fn test_parse_strips_decoration() {
        assert_eq!(Money::parse("₹1,200").unwrap().cents(), 120000);
        assert_eq!(Money::parse(" $ 5 000.25 ").unwrap().cents(), 500025);
        assert_eq!(Money::parse("1_000").unwrap().cents(), 100000);
        assert_eq!(Money::parse("€12.500").unwrap().cents(), 1250);
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(Money::parse("").unwrap(), Money::zero());
        assert_eq!(Money::parse("   ").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat));
        assert_eq!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat));
        assert_eq!(Money::parse("."), Err(MoneyParseError::InvalidFormat));
        assert_eq!(Money::parse("12a"), Err(MoneyParseError::InvalidFormat));
        assert_eq!(Money::parse("-5"), Err(MoneyParseError::Negative));
        assert_eq!(Money::parse("12.999"), Err(MoneyParseError::TooPrecise));
        assert_eq!(Money::parse("0.001"), Err(MoneyParseError::TooPrecise));
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(100);
        assert_eq!(a.checked_add(Money::from_cents(250)), Some(Money::from_cents(350)));
        assert_eq!(a.checked_sub(Money::from_cents(250)), Some(Money::from_cents(-150)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
