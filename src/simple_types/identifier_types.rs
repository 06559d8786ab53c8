//! ID type definitions
//!
//! Defines `MenuItemId`, `OrderId` and `OrderNumber`.

use chrono::Utc;
use uuid::Uuid;

use super::error::ValidationError;

// =============================================================================
// MenuItemId
// =============================================================================

/// An ID type that uniquely identifies a menu item
///
/// Backed by a UUID. Can be used as a `HashMap` key (`Hash` is derived).
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::MenuItemId;
///
/// let id = MenuItemId::create("MenuItemId", "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10").unwrap();
/// assert_eq!(id.value().to_string(), "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10");
///
/// // A malformed UUID causes an error
/// assert!(MenuItemId::create("MenuItemId", "item-42").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    /// Creates a `MenuItemId` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is not a valid UUID.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::new(field_name, "Must be a valid UUID"))
    }

    /// Creates a `MenuItemId` from an existing UUID
    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

// =============================================================================
// OrderId
// =============================================================================

/// An ID type that uniquely identifies a persisted order
///
/// Generated by the workflow when an order is created, never parsed from
/// user input.
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::OrderId;
///
/// let first = OrderId::generate();
/// let second = OrderId::generate();
/// assert_ne!(first, second);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a fresh random `OrderId`
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `OrderId` from an existing UUID
    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

// =============================================================================
// OrderNumber
// =============================================================================

/// A human-readable token identifying an order to customers and staff
///
/// Distinct from the internal [`OrderId`]. Generated as
/// `ORD-<UTC timestamp>-<random suffix>`; the random suffix makes
/// collisions negligible even for orders created in the same second,
/// and the store's uniqueness constraint remains as a safety net.
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::OrderNumber;
///
/// let number = OrderNumber::generate();
/// assert!(number.value().starts_with("ORD-"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderNumber(String);

/// Maximum character count for `OrderNumber`
const ORDER_NUMBER_MAX_LENGTH: usize = 40;

/// Number of random hex characters appended to a generated order number
const ORDER_NUMBER_SUFFIX_LENGTH: usize = 6;

impl OrderNumber {
    /// Generates a fresh order number
    ///
    /// Format: `ORD-<yyyymmddHHMMSS>-<6 uppercase hex chars>`.
    #[must_use]
    pub fn generate() -> Self {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let entropy = Uuid::new_v4().simple().to_string();
        let suffix = entropy[..ORDER_NUMBER_SUFFIX_LENGTH].to_uppercase();

        Self(format!("ORD-{timestamp}-{suffix}"))
    }

    /// Creates an `OrderNumber` from a string
    ///
    /// Used when an order number arrives from the outside, e.g. as an
    /// URL path segment.
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds 40
    /// characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        super::constrained_type::create_string(
            field_name,
            OrderNumber,
            ORDER_NUMBER_MAX_LENGTH,
            value,
        )
    }

    /// Returns a reference to the inner order number string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
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
    fn test_menu_item_id_create_valid_uuid() {
        let id = MenuItemId::create("MenuItemId", "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10");

        assert!(id.is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("item-42")]
    #[case("9b2cbc6e-3cb1-4b8c")]
    fn test_menu_item_id_create_invalid(#[case] input: &str) {
        let result = MenuItemId::create("MenuItemId", input);

        assert_eq!(
            result,
            Err(ValidationError::new("MenuItemId", "Must be a valid UUID"))
        );
    }

    #[rstest]
    fn test_menu_item_id_from_uuid_round_trips() {
        let uuid = Uuid::from_u128(42);
        let id = MenuItemId::from_uuid(uuid);

        assert_eq!(id.value(), uuid);
    }

    #[rstest]
    fn test_order_number_generate_shape() {
        let number = OrderNumber::generate();
        let segments: Vec<&str> = number.value().split('-').collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "ORD");
        assert_eq!(segments[1].len(), 14);
        assert_eq!(segments[2].len(), 6);
    }

    #[rstest]
    fn test_order_number_generate_is_unique() {
        let numbers: Vec<OrderNumber> = (0..100).map(|_| OrderNumber::generate()).collect();
        let mut values: Vec<&str> = numbers.iter().map(OrderNumber::value).collect();
        values.sort_unstable();
        values.dedup();

        assert_eq!(values.len(), 100);
    }

    #[rstest]
    fn test_order_number_create_rejects_empty() {
        assert!(OrderNumber::create("OrderNumber", "").is_err());
    }
}
