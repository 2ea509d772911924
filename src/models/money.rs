//! Money type for projected balances and event amounts
//!
//! Amounts are stored as i64 cents so that repeated additions and
//! subtractions across many pay cycles stay exact. No floating point
//! participates in any balance arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use paycycle::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is below zero
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from a decimal string
    ///
    /// Accepts "400", "400.5", "400.50", an optional leading `-` and an
    /// optional `$` symbol. The fractional part may have at most two digits;
    /// thousands separators are not accepted here (callers strip them first).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                if frac.is_empty() || frac.len() > 2 {
                    return Err(invalid());
                }
                let dollars: i64 = parse_digits(whole).ok_or_else(invalid)?;
                let mut frac_cents: i64 = parse_digits(frac).ok_or_else(invalid)?;
                if frac.len() == 1 {
                    frac_cents *= 10;
                }
                dollars * 100 + frac_cents
            }
            None => parse_digits(rest).ok_or_else(invalid)? * 100,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format without a currency symbol, e.g. "1050.00" or "-12.50"
    pub fn format_plain(&self) -> String {
        format!("{}{}.{:02}", self.sign(), (self.0 / 100).abs(), (self.0 % 100).abs())
    }

    fn sign(&self) -> &'static str {
        if self.is_negative() {
            "-"
        } else {
            ""
        }
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}${}.{:02}",
            self.sign(),
            (self.0 / 100).abs(),
            (self.0 % 100).abs()
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
