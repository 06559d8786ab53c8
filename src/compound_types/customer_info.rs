//! Customer information type

use crate::simple_types::{PhoneNumber, String50, ValidationError};

// =============================================================================
// CustomerInfo
// =============================================================================

/// Customer identity attached to an order
///
/// Both fields are optional: a walk-in customer can place an order without
/// leaving a name or phone number. Empty input strings become `None`.
///
/// # Examples
///
/// ```
/// use cafe_ordering::compound_types::CustomerInfo;
///
/// let customer = CustomerInfo::create("Aiko", "090-1234-5678").unwrap();
/// assert_eq!(customer.name().map(|name| name.value()), Some("Aiko"));
///
/// let anonymous = CustomerInfo::create("", "").unwrap();
/// assert!(anonymous.name().is_none());
/// assert!(anonymous.phone().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerInfo {
    name: Option<String50>,
    phone: Option<PhoneNumber>,
}

impl CustomerInfo {
    /// Creates a `CustomerInfo` from raw strings
    ///
    /// # Arguments
    ///
    /// * `name` - Customer display name (may be empty)
    /// * `phone` - Customer phone number (may be empty)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when a non-empty name exceeds 50
    /// characters or a non-empty phone number is malformed.
    pub fn create(name: &str, phone: &str) -> Result<Self, ValidationError> {
        let name = String50::create_option("CustomerName", name)?;
        let phone = PhoneNumber::create_option("CustomerPhone", phone)?;

        Ok(Self { name, phone })
    }

    /// Returns the customer name, if one was provided
    #[must_use]
    pub const fn name(&self) -> Option<&String50> {
        self.name.as_ref()
    }

    /// Returns the customer phone number, if one was provided
    #[must_use]
    pub const fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }
}
