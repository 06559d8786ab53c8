//! Validation module
//!
//! Converts an [`UnvalidatedOrder`] into a [`ValidatedOrder`].
//!
//! # Function List
//!
//! - [`validate_order_line`] - Validates a single cart line
//! - [`validate_order`] - Validates a whole order
//!
//! Per line, the catalog preconditions are checked in a fixed sequence
//! and the first failure aborts the whole order:
//!
//! 1. the referenced menu item exists (`NotFound`)
//! 2. the item is currently available (`Unavailable`)
//! 3. the requested extra shots do not exceed the item's maximum
//!    (`LimitExceeded`)
//!
//! Field-shape failures (malformed id, zero quantity, unknown size) are
//! reported as `Validation` errors.

use crate::catalog::MenuItem;
use crate::compound_types::CustomerInfo;
use crate::simple_types::{
    DrinkSize, ExtraShots, MenuItemId, MilkType, OrderQuantity, PaymentMethod,
    SpecialInstructions, ValidationError,
};
use crate::workflow::error_types::PlaceOrderError;
use crate::workflow::unvalidated_types::{UnvalidatedOrder, UnvalidatedOrderLine};
use crate::workflow::validated_types::{ValidatedOrder, ValidatedOrderLine};

// =============================================================================
// validate_order_line
// =============================================================================

/// Validates a single cart line against the catalog
///
/// # Type Parameters
///
/// * `LookupMenuItem` - Menu item lookup function type
///
/// # Arguments
///
/// * `lookup_menu_item` - Resolves a menu item id to its catalog record
/// * `line` - The raw cart line
///
/// # Errors
///
/// - [`PlaceOrderError::Validation`] for malformed fields
/// - [`PlaceOrderError::NotFound`] when the item does not exist
/// - [`PlaceOrderError::Unavailable`] when the item cannot be ordered
/// - [`PlaceOrderError::LimitExceeded`] when extra shots exceed the
///   item's maximum
pub fn validate_order_line<LookupMenuItem>(
    lookup_menu_item: &LookupMenuItem,
    line: &UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine, PlaceOrderError>
where
    LookupMenuItem: Fn(&MenuItemId) -> Option<MenuItem>,
{
    let menu_item_id = MenuItemId::create("MenuItemId", line.menu_item_id())?;

    let menu_item =
        lookup_menu_item(&menu_item_id).ok_or_else(|| PlaceOrderError::not_found(&menu_item_id))?;

    if !menu_item.available() {
        return Err(PlaceOrderError::unavailable(menu_item.name().value()));
    }

    let extra_shots = ExtraShots::create("ExtraShots", line.extra_shots())?;

    if extra_shots.value() > menu_item.max_extra_shots() {
        return Err(PlaceOrderError::limit_exceeded(
            menu_item.name().value(),
            menu_item.max_extra_shots(),
        ));
    }

    let quantity = OrderQuantity::create("Quantity", line.quantity())?;
    let size = DrinkSize::create_option("Size", line.size())?;
    let milk_type = MilkType::create_option("MilkType", line.milk_type())?;
    let special_instructions =
        SpecialInstructions::create_option("SpecialInstructions", line.special_instructions())?;

    Ok(ValidatedOrderLine::new(
        menu_item,
        quantity,
        size,
        milk_type,
        extra_shots,
        special_instructions,
    ))
}

// =============================================================================
// validate_order
// =============================================================================

/// Validates a whole order
///
/// Order-level fields are validated first, then each line in cart
/// order. The first failing line aborts the whole order, so a
/// mid-sequence failure can never leave partially validated state
/// behind.
///
/// # Type Parameters
///
/// * `LookupMenuItem` - Menu item lookup function type
///
/// # Arguments
///
/// * `lookup_menu_item` - Resolves a menu item id to its catalog record
/// * `unvalidated_order` - The raw order
///
/// # Errors
///
/// Any error produced by [`validate_order_line`], plus
/// [`PlaceOrderError::Validation`] when the cart is empty or an
/// order-level field is malformed.
pub fn validate_order<LookupMenuItem>(
    lookup_menu_item: &LookupMenuItem,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<ValidatedOrder, PlaceOrderError>
where
    LookupMenuItem: Fn(&MenuItemId) -> Option<MenuItem>,
{
    let customer = CustomerInfo::create(
        unvalidated_order.customer_name(),
        unvalidated_order.customer_phone(),
    )?;
    let payment_method =
        PaymentMethod::create("PaymentMethod", unvalidated_order.payment_method())?;
    let special_instructions = SpecialInstructions::create_option(
        "SpecialInstructions",
        unvalidated_order.special_instructions(),
    )?;

    if unvalidated_order.lines().is_empty() {
        return Err(ValidationError::new("Lines", "Must not be empty").into());
    }

    let lines = unvalidated_order
        .lines()
        .iter()
        .map(|line| validate_order_line(lookup_menu_item, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedOrder::new(
        customer,
        payment_method,
        special_instructions,
        lines,
    ))
}
