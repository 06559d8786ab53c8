//! Validation error type definition

use thiserror::Error;

/// Struct representing a validation error
///
/// Used commonly by all constrained types.
/// Holds the name of the offending field and a message.
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::ValidationError;
///
/// let error = ValidationError::new("Quantity", "Must not be less than 1");
/// assert_eq!(error.field_name, "Quantity");
/// assert_eq!(error.to_string(), "Quantity: Must not be less than 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    ///
    /// # Arguments
    ///
    /// * `field_name` - Name of the field where the error occurred
    /// * `message` - Error message
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
