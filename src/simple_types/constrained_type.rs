//! Helper functions for generating constrained types
//!
//! Each function is generic over the target newtype so every smart
//! constructor in the crate shares the same validation behavior and
//! error wording.

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `max_length` - Maximum character count
/// * `value` - Input string
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is an empty string
/// - When the input exceeds the maximum length
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::ValidationError;
///
/// #[derive(Debug, PartialEq)]
/// struct ItemName(String);
///
/// fn create_item_name(value: &str) -> Result<ItemName, ValidationError> {
///     cafe_ordering::simple_types::constrained_type::create_string(
///         "ItemName",
///         ItemName,
///         50,
///         value,
///     )
/// }
///
/// assert!(create_item_name("Caffè Latte").is_ok());
/// assert!(create_item_name("").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if value.chars().count() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates a string type with maximum length constraint that returns `None` for empty strings
///
/// Used for optional fields.
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `max_length` - Maximum character count
/// * `value` - Input string
///
/// # Returns
///
/// * `Ok(None)` - For an empty string
/// * `Ok(Some(T))` - On successful validation
/// * `Err(ValidationError)` - When exceeding maximum length
///
/// # Errors
///
/// Returns [`ValidationError`] when the input exceeds the maximum length.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Ok(None)
    } else if value.chars().count() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(Some(constructor(value.to_string())))
    }
}

/// Creates a string type that must match a pattern
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `pattern` - Regular expression the input must match
/// * `value` - Input string
///
/// # Errors
///
/// Returns [`ValidationError`] when the input does not match the pattern.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        Err(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{pattern}'"),
        ))
    }
}

/// Creates an integer type with range constraints
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes an integer and produces type T
/// * `min_value` - Minimum value
/// * `max_value` - Maximum value
/// * `value` - Input integer
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is outside
/// `min_value..=max_value`.
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: u32,
) -> Result<T, ValidationError>
where
    F: FnOnce(u32) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a decimal type with range constraints
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a decimal and produces type T
/// * `min_value` - Minimum value
/// * `max_value` - Maximum value
/// * `value` - Input decimal
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is outside
/// `min_value..=max_value`.
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}
