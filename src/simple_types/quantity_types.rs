//! Quantity type definitions
//!
//! Defines `OrderQuantity` and `ExtraShots`.

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// OrderQuantity
// =============================================================================

/// The quantity of a single cart line
///
/// A positive integer between 1 and 50.
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::OrderQuantity;
///
/// let quantity = OrderQuantity::create("Quantity", 2).unwrap();
/// assert_eq!(quantity.value(), 2);
///
/// // Zero is not a valid quantity
/// assert!(OrderQuantity::create("Quantity", 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderQuantity(u32);

/// Minimum value for `OrderQuantity`
const ORDER_QUANTITY_MIN: u32 = 1;

/// Maximum value for `OrderQuantity`
const ORDER_QUANTITY_MAX: u32 = 50;

impl OrderQuantity {
    /// Creates an `OrderQuantity` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is outside `1..=50`.
    pub fn create(field_name: &str, value: u32) -> Result<Self, ValidationError> {
        constrained_type::create_integer(
            field_name,
            OrderQuantity,
            ORDER_QUANTITY_MIN,
            ORDER_QUANTITY_MAX,
            value,
        )
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the quantity as a `Decimal` for price arithmetic
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

// =============================================================================
// ExtraShots
// =============================================================================

/// The number of extra espresso shots added to a line
///
/// An integer between 0 and 10. The upper bound is an absolute sanity
/// limit; the per-item maximum is enforced separately during order
/// validation.
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::ExtraShots;
///
/// let shots = ExtraShots::create("ExtraShots", 2).unwrap();
/// assert_eq!(shots.value(), 2);
/// assert!(!shots.is_zero());
///
/// let none = ExtraShots::create("ExtraShots", 0).unwrap();
/// assert!(none.is_zero());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExtraShots(u32);

/// Maximum value for `ExtraShots`
const EXTRA_SHOTS_MAX: u32 = 10;

impl ExtraShots {
    /// Creates an `ExtraShots` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value exceeds 10.
    pub fn create(field_name: &str, value: u32) -> Result<Self, ValidationError> {
        constrained_type::create_integer(field_name, ExtraShots, 0, EXTRA_SHOTS_MAX, value)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns `true` when no extra shots were requested
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the shot count as a `Decimal` for price arithmetic
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(50, true)]
    #[case(0, false)]
    #[case(51, false)]
    fn test_order_quantity_bounds(#[case] input: u32, #[case] expected_ok: bool) {
        assert_eq!(OrderQuantity::create("Quantity", input).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_order_quantity_as_decimal() {
        let quantity = OrderQuantity::create("Quantity", 3).unwrap();

        assert_eq!(quantity.as_decimal(), Decimal::from(3));
    }

    #[rstest]
    #[case(0, true)]
    #[case(10, true)]
    #[case(11, false)]
    fn test_extra_shots_bounds(#[case] input: u32, #[case] expected_ok: bool) {
        assert_eq!(ExtraShots::create("ExtraShots", input).is_ok(), expected_ok);
    }
}
