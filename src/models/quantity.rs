//! Quantity type for inventory cost layers
//!
//! Stored as hundredths of a unit (i64), mirroring how `Money` stores cents.
//! A quantity can be read as a monetary amount one-for-one, which is how
//! cost-of-goods amounts are relieved from layers recorded in monetary units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::money::{Money, MoneyParseError};

/// A stock quantity with two decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Number of stored hundredths per whole unit
    pub const SCALE: i64 = 100;

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Read a monetary amount as a quantity (1.00 of money == 1 unit)
    pub const fn from_amount(amount: Money) -> Self {
        Self(amount.cents())
    }

    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Read this quantity as a monetary amount (1 unit == 1.00 of money)
    pub const fn as_amount(&self) -> Money {
        Money::from_cents(self.0)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a quantity such as "12", "2.5" or "0.25"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.starts_with('$') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        // Same two-decimal grammar as money amounts
        Money::parse(s).map(Self::from_amount)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = (self.0 % Self::SCALE).abs();
        let sign = if self.0 < 0 && whole == 0 { "-" } else { "" };
        let formatted = if frac == 0 {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{:02}", sign, whole, frac)
        };
        f.pad(&formatted)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        let q = Quantity::from_units(5);
        assert_eq!(q.hundredths(), 500);
        assert!(q.is_positive());
        assert!(Quantity::zero().is_zero());
    }

    #[test]
    fn test_amount_conversion() {
        let q = Quantity::from_amount(Money::from_cents(1550));
        assert_eq!(q, Quantity::from_hundredths(1550));
        assert_eq!(q.as_amount(), Money::from_cents(1550));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_units(3).to_string(), "3");
        assert_eq!(Quantity::from_hundredths(250).to_string(), "2.50");
        assert_eq!(Quantity::from_hundredths(-50).to_string(), "-0.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Quantity::parse("12").unwrap(), Quantity::from_units(12));
        assert_eq!(Quantity::parse("2.5").unwrap(), Quantity::from_hundredths(250));
        assert!(Quantity::parse("$3").is_err());
        assert!(Quantity::parse("abc").is_err());
        assert!(Quantity::parse("1.aé").is_err());
        assert!(Quantity::parse("999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let mut q = Quantity::from_units(5);
        q -= Quantity::from_units(2);
        assert_eq!(q, Quantity::from_units(3));
        let total: Quantity = vec![Quantity::from_units(1), Quantity::from_units(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Quantity::from_units(3));
    }
}
