//! # Price Module
//!
//! Provides the `Price` type for handling product prices exactly.
//!
//! ## Why Not f64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price written as 12.50 and read back as 12.4999999 no longer        │
//! │  matches an equality finder.                                            │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Decimal("12.50") is stored as the text "12.50" and parsed back      │
//! │    to the same value, every time                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Column Shape
//! Prices follow a `NUMERIC(10,2)` column: at most 8 integer digits and
//! 2 fractional digits, never negative.
//!
//! ## Usage
//! ```rust
//! use catalog_core::price::Price;
//!
//! let price: Price = "12.50".parse().unwrap();
//! assert_eq!(price.to_storage(), "12.50");
//!
//! let same = Price::from_cents(1250).unwrap();
//! assert_eq!(price, same);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Number of fractional digits a price carries.
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price: 99,999,999.99
const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// A non-negative product price with exactly two fractional digits.
///
/// ## Design Decisions
/// - **Decimal inside**: no binary rounding anywhere between input and storage
/// - **Always rescaled to 2 digits**: `12.5` and `12.50` produce the same
///   stored text, so SQL equality on the column is value equality
/// - **Serde via Decimal**: serializes as the string `"12.50"`, and
///   deserializing runs the same validation as [`Price::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal value.
    ///
    /// ## Errors
    /// - `OutOfRange` if negative or above 99,999,999.99
    /// - `InvalidFormat` if it has more than two significant fractional digits
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::price::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(Price::new(Decimal::new(1250, 2)).is_ok());   // 12.50
    /// assert!(Price::new(Decimal::new(-1, 0)).is_err());    // negative
    /// assert!(Price::new(Decimal::new(12345, 3)).is_err()); // 12.345
    /// ```
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        let max = Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE);

        if value.is_sign_negative() && !value.is_zero() {
            return Err(out_of_range(max));
        }

        if value > max {
            return Err(out_of_range(max));
        }

        // Trailing zeros beyond two places are fine ("12.500"), real digits are not
        if value.normalize().scale() > PRICE_SCALE {
            return Err(ValidationError::invalid_format(
                "price",
                format!("at most {} decimal places allowed", PRICE_SCALE),
            ));
        }

        let mut value = value.abs();
        value.rescale(PRICE_SCALE);
        Ok(Price(value))
    }

    /// Creates a price from a whole number of cents.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::price::Price;
    ///
    /// let price = Price::from_cents(1099).unwrap();
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    pub fn from_cents(cents: i64) -> ValidationResult<Self> {
        Price::new(Decimal::new(cents, PRICE_SCALE))
    }

    /// Zero price (free items).
    pub fn zero() -> Self {
        Price(Decimal::new(0, PRICE_SCALE))
    }

    /// Returns the exact decimal value.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the value in cents.
    pub fn cents(&self) -> i64 {
        // Scale is always PRICE_SCALE, so the mantissa is the cent count
        self.0.mantissa() as i64
    }

    /// Text written to the `price` column, always two fractional digits.
    pub fn to_storage(&self) -> String {
        self.0.to_string()
    }

    /// Parses the text read back from the `price` column.
    pub fn from_storage(raw: &str) -> ValidationResult<Self> {
        raw.parse()
    }
}

fn out_of_range(max: Decimal) -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: "0.00".to_string(),
        max: max.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let value = Decimal::from_str_exact(trimmed).map_err(|e| {
            ValidationError::invalid_format("price", format!("'{}' is not a decimal: {}", trimmed, e))
        })?;

        Price::new(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_storage_form() {
        let price: Price = "12.50".parse().unwrap();
        assert_eq!(price.to_storage(), "12.50");
        assert_eq!(price.cents(), 1250);

        // Fewer digits are padded to two
        let price: Price = "12.5".parse().unwrap();
        assert_eq!(price.to_storage(), "12.50");

        let price: Price = "7".parse().unwrap();
        assert_eq!(price.to_storage(), "7.00");
    }

    #[test]
    fn test_equal_values_compare_equal() {
        let a: Price = "12.5".parse().unwrap();
        let b: Price = "12.500".parse().unwrap();
        let c = Price::from_cents(1250).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.amount(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_storage_round_trip_is_exact() {
        let original: Price = "0.10".parse().unwrap();
        let restored = Price::from_storage(&original.to_storage()).unwrap();
        assert_eq!(original, restored);
        assert_eq!(restored.amount(), Decimal::new(10, 2));
    }

    #[test]
    fn test_rejects_too_many_decimal_places() {
        let err = "12.345".parse::<Price>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_rejects_negative_and_too_large() {
        assert!(matches!(
            "-1.00".parse::<Price>(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            "100000000.00".parse::<Price>(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!("99999999.99".parse::<Price>().is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            "twelve".parse::<Price>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "  ".parse::<Price>(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(Price::zero().to_storage(), "0.00");
        assert_eq!("0".parse::<Price>().unwrap(), Price::zero());
        assert_eq!(Price::default(), Price::zero());
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let price = Price::from_cents(1575).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"15.75\"");

        let back: Price = serde_json::from_str("\"15.75\"").unwrap();
        assert_eq!(back, price);

        assert!(serde_json::from_str::<Price>("\"-3.00\"").is_err());
    }
}
