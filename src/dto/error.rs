//! Error DTOs
//!
//! Defines types for serializing API response errors.

use serde::{Deserialize, Serialize};

use crate::workflow::PlaceOrderError;

// =============================================================================
// PlaceOrderErrorDto
// =============================================================================

/// `PlaceOrder` workflow error DTO
///
/// A type for serializing errors that occurred in the workflow.
/// Internally tagged format discriminated by the `type` field.
/// Persistence failures are redacted to an opaque message; the detail is
/// logged server-side, never exposed to the caller.
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::PlaceOrderErrorDto;
/// use cafe_ordering::workflow::PlaceOrderError;
///
/// let error = PlaceOrderError::unavailable("Caffè Latte");
/// let dto = PlaceOrderErrorDto::from_domain(&error);
///
/// match dto {
///     PlaceOrderErrorDto::Unavailable { name } => {
///         assert_eq!(name, "Caffè Latte");
///     }
///     _ => panic!("Expected Unavailable error"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaceOrderErrorDto {
    /// Field-level validation error
    Validation {
        /// Field name
        field_name: String,
        /// Error message
        message: String,
    },
    /// Referenced menu item does not exist
    NotFound {
        /// The unknown menu item id
        menu_item_id: String,
    },
    /// Menu item exists but cannot be ordered
    Unavailable {
        /// Item name
        name: String,
    },
    /// Extra shots beyond the item's maximum
    LimitExceeded {
        /// Item name
        name: String,
        /// The item's configured maximum
        max_extra_shots: u32,
    },
    /// Price computation error
    Pricing {
        /// Error message
        message: String,
    },
    /// Storage failure (opaque)
    Persistence {
        /// Redacted message
        message: String,
    },
}

impl PlaceOrderErrorDto {
    /// Creates a `PlaceOrderErrorDto` from the domain `PlaceOrderError`
    ///
    /// Converts to DTO as a pure function.
    ///
    /// # Arguments
    ///
    /// * `error` - Source `PlaceOrderError`
    #[must_use]
    pub fn from_domain(error: &PlaceOrderError) -> Self {
        match error {
            PlaceOrderError::Validation(validation) => Self::Validation {
                field_name: validation.field_name.clone(),
                message: validation.message.clone(),
            },
            PlaceOrderError::NotFound { menu_item_id } => Self::NotFound {
                menu_item_id: menu_item_id.clone(),
            },
            PlaceOrderError::Unavailable { name } => Self::Unavailable { name: name.clone() },
            PlaceOrderError::LimitExceeded {
                name,
                max_extra_shots,
            } => Self::LimitExceeded {
                name: name.clone(),
                max_extra_shots: *max_extra_shots,
            },
            PlaceOrderError::Pricing(pricing) => Self::Pricing {
                message: pricing.message().to_string(),
            },
            PlaceOrderError::Persistence(_) => Self::Persistence {
                message: "Order could not be saved".to_string(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
