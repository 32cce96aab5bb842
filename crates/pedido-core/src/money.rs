//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A menu priced in floats:                                               │
//! │    3 × 19.90 = 59.699999999999996  ❌ WRONG!                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 1990 cents = 5970 cents = R$ 59,70                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Menu prices arrive as decimal strings (`"35.90"`, `"35,90"`) and are
//! parsed straight into cents with [`Money::parse`]. Nothing in the crate
//! ever goes through `f64`.
//!
//! ## Usage
//! ```rust
//! use pedido_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::parse("19.90").unwrap();
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 5970);
//!
//! let brl = CurrencyFormat::new("R$", ',');
//! assert_eq!(brl.format(line), "R$ 59,70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (centavos for BRL).
///
/// ## Design Decisions
/// - **i64 (signed)**: prices are checked non-negative by
///   [`validate_price`](crate::validation::validate_price)
/// - **Saturating arithmetic**: sums and line totals clamp at `i64::MAX`
///   instead of wrapping negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a plain integer**: the widget receives cents
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► LineItem.unit_price ──► LineItem.line_total
///                                                   │
///                                                   ▼
///                       CartStore.total ──► OrderSummary.total ──► message
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pedido_core::money::Money;
    ///
    /// let price = Money::from_cents(3590); // R$ 35,90
    /// assert_eq!(price.cents(), 3590);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"35.90"`, `"35,9"` or `"35"`.
    ///
    /// ## Rules
    /// - Either `.` or `,` is accepted as the decimal separator
    /// - At most two decimal places
    /// - No sign: menu prices are never negative
    ///
    /// ```rust
    /// use pedido_core::money::Money;
    ///
    /// assert_eq!(Money::parse("35.90").unwrap().cents(), 3590);
    /// assert_eq!(Money::parse("35,9").unwrap().cents(), 3590);
    /// assert_eq!(Money::parse("12").unwrap().cents(), 1200);
    /// assert!(Money::parse("-1.00").is_err());
    /// assert!(Money::parse("1.999").is_err());
    /// ```
    pub fn parse(input: &str) -> CoreResult<Self> {
        let invalid = |reason: &str| CoreError::InvalidPrice {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("amount is empty"));
        }

        let (major, minor) = trimmed
            .split_once(|c| c == '.' || c == ',')
            .unwrap_or((trimmed, ""));

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal separator"));
        }
        if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected at most two decimal digits"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;
        let minor_cents = match minor.len() {
            0 => 0,
            1 => i64::from(minor.as_bytes()[0] - b'0') * 10,
            _ => minor.parse::<i64>().map_err(|_| invalid("invalid decimal digits"))?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor_cents))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a line quantity.
    ///
    /// ```rust
    /// use pedido_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(599);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1797);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Fixed two-decimal currency rendering: symbol, space, amount.
///
/// The widget shows one currency only, so this is a symbol plus a decimal
/// separator rather than a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimal_separator: char) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            decimal_separator,
        }
    }

    /// Formats the amount without the symbol, e.g. `35,90`.
    pub fn amount(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{:02}",
            sign,
            money.major().abs(),
            self.decimal_separator,
            money.cents_part()
        )
    }

    /// Formats the amount with the symbol, e.g. `R$ 35,90`.
    pub fn format(&self, money: Money) -> String {
        format!("{} {}", self.symbol, self.amount(money))
    }
}

impl Default for CurrencyFormat {
    /// Brazilian real: `R$ 35,90`.
    fn default() -> Self {
        CurrencyFormat::new("R$", ',')
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering with a dot, e.g. `35.90`.
///
/// For customer-facing text use [`CurrencyFormat`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating, like [`Money::multiply_quantity`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
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
