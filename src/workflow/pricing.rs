//! Pricing module
//!
//! Provides pricing logic to convert a `ValidatedOrder` to a
//! `PricedOrder`.
//!
//! # Function List
//!
//! - [`tax_rate`] - The fixed tax rate applied to every order
//! - [`extra_shot_price`] - The fixed price of one extra espresso shot
//! - [`round_currency`] - Rounds an amount to 2 decimal places
//! - [`price_line`] - Attaches unit price and line total to a line
//! - [`price_order`] - Prices a whole order and aggregates the totals
//!
//! Per line: `unit_price = base_price (+ size modifier) (+ extra shots ×
//! 0.75)`, floored at zero; `line_total = unit_price × quantity`. The
//! size modifier applies only when a size was selected, the item supports
//! size options, and a (item, size) adjustment is configured — otherwise
//! the size is recorded but does not change the price.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::simple_types::{BillingAmount, DrinkSize, MenuItemId, Price, PriceModifier};
use crate::workflow::error_types::{PlaceOrderError, PricingError};
use crate::workflow::priced_types::{PricedOrder, PricedOrderLine};
use crate::workflow::validated_types::{ValidatedOrder, ValidatedOrderLine};

// =============================================================================
// Constants
// =============================================================================

/// The fixed tax rate applied to every order subtotal
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::pricing::tax_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(tax_rate(), Decimal::from_str("0.10").unwrap());
/// ```
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::from_str("0.10").expect("Valid decimal literal")
}

/// The fixed price of one extra espresso shot
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::pricing::extra_shot_price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(extra_shot_price(), Decimal::from_str("0.75").unwrap());
/// ```
#[must_use]
pub fn extra_shot_price() -> Decimal {
    Decimal::from_str("0.75").expect("Valid decimal literal")
}

// =============================================================================
// round_currency
// =============================================================================

/// Rounds an amount to 2 decimal places, half away from zero
///
/// Applied at the point where priced values are materialized, so every
/// persisted amount has at most 2 decimal places.
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::pricing::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_currency(Decimal::from_str("1.955").unwrap());
/// assert_eq!(rounded, Decimal::from_str("1.96").unwrap());
/// ```
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// price_line
// =============================================================================

/// Computes unit price and line total for a validated line
///
/// # Type Parameters
///
/// * `LookupSizeModifier` - Size-pricing lookup function type
///
/// # Arguments
///
/// * `lookup_size_modifier` - Resolves a configured (item, size) price
///   adjustment
/// * `line` - The validated line
///
/// # Errors
///
/// Returns [`PlaceOrderError::Pricing`] when a computed amount falls
/// outside its money type's range.
pub fn price_line<LookupSizeModifier>(
    lookup_size_modifier: &LookupSizeModifier,
    line: &ValidatedOrderLine,
) -> Result<PricedOrderLine, PlaceOrderError>
where
    LookupSizeModifier: Fn(&MenuItemId, DrinkSize) -> Option<PriceModifier>,
{
    let menu_item = line.menu_item();
    let mut unit_price = menu_item.base_price().value();

    if let Some(size) = line.size() {
        if menu_item.has_size_options() {
            if let Some(modifier) = lookup_size_modifier(&menu_item.id(), size) {
                unit_price += modifier.value();
            }
        }
    }

    unit_price += line.extra_shots().as_decimal() * extra_shot_price();

    // Price floor: a large small-size discount must not drive the price negative
    let unit_price = round_currency(unit_price.max(Decimal::ZERO));
    let line_total = round_currency(unit_price * line.quantity().as_decimal());

    let unit_price =
        Price::create(unit_price).map_err(|error| PricingError::new(&error.to_string()))?;
    let line_total =
        BillingAmount::create(line_total).map_err(|error| PricingError::new(&error.to_string()))?;

    Ok(PricedOrderLine::new(
        menu_item.id(),
        menu_item.name().clone(),
        line.quantity(),
        line.size(),
        line.milk_type(),
        line.extra_shots(),
        unit_price,
        line_total,
        line.special_instructions().cloned(),
    ))
}

// =============================================================================
// price_order
// =============================================================================

/// Prices a whole validated order
///
/// Prices each line, then aggregates:
/// `subtotal = Σ line_total`, `tax_amount = subtotal × tax_rate()`,
/// `total_amount = subtotal + tax_amount`, each rounded to 2 decimal
/// places.
///
/// # Type Parameters
///
/// * `LookupSizeModifier` - Size-pricing lookup function type
///
/// # Arguments
///
/// * `lookup_size_modifier` - Resolves a configured (item, size) price
///   adjustment
/// * `validated_order` - The validated order
///
/// # Errors
///
/// Returns [`PlaceOrderError::Pricing`] when a computed amount falls
/// outside its money type's range.
pub fn price_order<LookupSizeModifier>(
    lookup_size_modifier: &LookupSizeModifier,
    validated_order: &ValidatedOrder,
) -> Result<PricedOrder, PlaceOrderError>
where
    LookupSizeModifier: Fn(&MenuItemId, DrinkSize) -> Option<PriceModifier>,
{
    let lines = validated_order
        .lines()
        .iter()
        .map(|line| price_line(lookup_size_modifier, line))
        .collect::<Result<Vec<_>, _>>()?;

    let line_totals: Vec<BillingAmount> = lines.iter().map(PricedOrderLine::line_total).collect();
    let subtotal =
        BillingAmount::sum(&line_totals).map_err(|error| PricingError::new(&error.to_string()))?;

    let tax_amount = round_currency(subtotal.value() * tax_rate());
    let total_amount = subtotal.value() + tax_amount;

    let tax_amount =
        BillingAmount::create(tax_amount).map_err(|error| PricingError::new(&error.to_string()))?;
    let total_amount = BillingAmount::create(total_amount)
        .map_err(|error| PricingError::new(&error.to_string()))?;

    Ok(PricedOrder::new(
        validated_order.customer().clone(),
        validated_order.payment_method(),
        validated_order.special_instructions().cloned(),
        lines,
        subtotal,
        tax_amount,
        total_amount,
    ))
}
