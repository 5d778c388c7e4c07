//! Type-safe price representation using decimal arithmetic.
//!
//! Prices travel over the wire as plain JSON numbers (`185`, `12.5`) so that
//! browser clients can use them directly. Internally all arithmetic is done in
//! [`Decimal`] to avoid binary floating point drift in cart totals.
//!
//! Arithmetic saturates at [`Decimal::MAX`] / [`Decimal::MIN`]. Carts are
//! restored from client-held JSON, so any amount can reach it.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The store trades in US dollars only.
const CURRENCY_SYMBOL: &str = "$";

/// Errors that can occur when constructing a catalog [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Catalog prices must be strictly positive.
    #[error("price must be positive (got {0})")]
    NotPositive(Decimal),
}

/// An amount of money in the store currency.
///
/// Zero is a valid `Price` (an empty cart, free shipping); catalog entries are
/// constructed through [`Price::positive`], which rejects zero and negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a price that must be strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] for zero or negative amounts.
    pub fn positive(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Apply a fractional rate (e.g. a tax rate) and round to cents.
    #[must_use]
    pub fn scaled(self, rate: Decimal) -> Self {
        Self(self.0.saturating_mul(rate).round_dp(2))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.times(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(Price::positive(Decimal::ZERO).is_err());
        assert!(Price::positive(Decimal::from(-5)).is_err());
        assert!(Price::positive(Decimal::from(185)).is_ok());
    }

    #[test]
    fn test_serializes_as_json_number() {
        let price = Price::from_units(185);
        let json = serde_json::to_value(price).unwrap();
        assert!(json.is_number());
        assert_eq!(json.as_f64(), Some(185.0));

        let parsed: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed.amount(), Decimal::new(125, 1));
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_units(185).times(2), Price::from_units(125)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(495));
        assert_eq!(Price::from_units(10) * 3, Price::from_units(30));
    }

    #[test]
    fn test_scaled_rounds_to_cents() {
        // 8% of 165 = 13.20
        let tax = Price::from_units(165).scaled(Decimal::new(8, 2));
        assert_eq!(tax.amount(), Decimal::new(1320, 2));

        // 8% of 0.99 = 0.0792 -> 0.08
        let tax = Price::new(Decimal::new(99, 2)).scaled(Decimal::new(8, 2));
        assert_eq!(tax.amount(), Decimal::new(8, 2));
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Price::new(Decimal::MAX);
        assert_eq!(huge.times(2), huge);
        assert_eq!(huge + Price::from_units(1), huge);
        assert_eq!(Price::new(Decimal::MIN).times(3).amount(), Decimal::MIN);
        assert!(huge.scaled(Decimal::new(8, 2)) < huge);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_units(185).to_string(), "$185.00");
        assert_eq!(Price::new(Decimal::new(1999, 2)).display(), "$19.99");
    }
}
