//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, formatting, and the parser for
//! amounts typed in by the user.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Serializes as a decimal string (`"400.00"`) so hand-edited settings read
/// in currency units. Arithmetic saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_cli::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
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

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Divide by a count, rounding to the nearest cent (zero when `count` is 0)
    pub fn div_round(&self, count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        Self((self.0 as f64 / count as f64).round() as i64)
    }

    /// What percentage `self` is of `whole`; 0 when `whole` is not positive
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_positive() {
            (self.0 as f64 / whole.0 as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Parse a stored money amount
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".5".
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse an amount typed in at entry time
    ///
    /// A leading currency symbol is stripped. Empty, negative, non-numeric and
    /// zero amounts are rejected.
    pub fn parse_amount_input(input: &str) -> Result<Self, AmountInputError> {
        let cleaned = input.trim().trim_start_matches('$').trim();

        if cleaned.starts_with('-') {
            return Err(AmountInputError::Negative);
        }
        if cleaned.is_empty() {
            return Err(AmountInputError::Empty);
        }

        let amount =
            Self::parse(cleaned).map_err(|_| AmountInputError::NotANumber(cleaned.to_string()))?;

        if !amount.is_positive() {
            return Err(AmountInputError::NotPositive);
        }

        Ok(amount)
    }

    /// Format as plain decimal text, the way amounts are written to disk
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

/// Accepts `"400.00"`, `"$400"`, or a bare number of currency units
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Money::parse(&text).map_err(de::Error::custom),
            Value::Number(number) => match number.as_i64() {
                Some(units) => units
                    .checked_mul(100)
                    .map(Money)
                    .ok_or_else(|| de::Error::custom(format!("amount {} is too large", units))),
                None => Money::parse(&number.to_string()).map_err(de::Error::custom),
            },
            other => Err(de::Error::custom(format!(
                "expected an amount such as \"400.00\", found {}",
                other
            ))),
        }
    }
}

/// Error type for parsing stored money values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Why an entered amount was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountInputError {
    #[error("You didn't enter anything! Try again.")]
    Empty,

    #[error("Expenses can't be negative.")]
    Negative,

    #[error("'{0}' doesn't look like a money amount. Please try again.")]
    NotANumber(String),

    #[error("Amount has to be positive!")]
    NotPositive,
}
