//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A unit price.
///
/// The currency is unspecified and assumed consistent across the cart, so the
/// wrapper carries the amount only. Serializes as a plain JSON number to match
/// the persisted cart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Price for `quantity` units of this item.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::str::FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Decimal>().map(Self)
    }
}

// The persisted cart stores prices as JSON numbers, so serialization goes
// through rust_decimal's float representation rather than the string default.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_serializes_as_number() {
        let price = Price::new(dec!(10.5));
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "10.5");
    }

    #[test]
    fn test_deserializes_integers_and_floats() {
        let price: Price = serde_json::from_str("10").unwrap();
        assert_eq!(price, Price::new(dec!(10)));

        let price: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(price, Price::new(dec!(19.99)));
    }

    #[test]
    fn test_line_total() {
        let price = Price::new(dec!(10.50));
        assert_eq!(price.line_total(3), dec!(31.50));
        assert_eq!(price.line_total(0), dec!(0));
    }

    #[test]
    fn test_from_str() {
        let price: Price = "19.99".parse().unwrap();
        assert_eq!(price.as_decimal(), dec!(19.99));
        assert!("not-a-price".parse::<Price>().is_err());
    }

    #[test]
    fn test_display() {
        let price = Price::new(dec!(19.99));
        assert_eq!(format!("{price}"), "19.99");
    }
}
