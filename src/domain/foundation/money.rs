//! Money value object (USD, two decimal places).
//!
//! All amounts that reach the payments platform pass through [`Money`].
//! Values are held as `rust_decimal::Decimal` and normalised to cents with
//! midpoint-away-from-zero rounding, so sums never drift the way binary
//! floats do.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ValidationError;

/// ISO 4217 code of the only currency this server prices in.
pub const CURRENCY_CODE: &str = "USD";

/// Number of fraction digits in a USD amount.
const MINOR_UNITS: u32 = 2;

/// A non-negative USD amount with exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), MINOR_UNITS))
    }

    /// Creates an amount from a decimal, rounding to cents.
    pub fn from_decimal(value: Decimal, field: &str) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::negative(field));
        }
        if value.is_zero() {
            return Ok(Self::from_cents(0));
        }
        Ok(Self(round_to_cents(value)))
    }

    /// Parses a decimal string such as `"49.99"`.
    ///
    /// `field` names the payload field in the returned error.
    pub fn parse(raw: &str, field: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let value = Decimal::from_str(trimmed).map_err(|e| {
            ValidationError::invalid_format(field, format!("'{}' is not a decimal: {}", trimmed, e))
        })?;
        Self::from_decimal(value, field)
    }

    /// Returns the underlying decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true for a zero amount.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(|sum| Self(round_to_cents(sum)))
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(|product| Self(round_to_cents(product)))
    }

    /// Sums a sequence of amounts, returning `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }
}

fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MINOR_UNITS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNITS);
    rounded
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(MINOR_UNITS);
        write!(f, "{}", value)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(&raw, "amount").map_err(serde::de::Error::custom)
    }
}
