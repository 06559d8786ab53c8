//! Tests for the pricing module
//!
//! Covers the per-line pricing algorithm (base price, size modifier,
//! extra shots, zero floor) and order-level aggregation (subtotal, tax,
//! total, 2-decimal rounding).

use cafe_ordering::catalog::{MenuCategory, MenuItem};
use cafe_ordering::compound_types::CustomerInfo;
use cafe_ordering::simple_types::{
    DrinkSize, ExtraShots, MenuItemId, MilkType, OrderQuantity, PaymentMethod, Price,
    PriceModifier, String50,
};
use cafe_ordering::workflow::{ValidatedOrder, ValidatedOrderLine, price_line, price_order};
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Test data factory
// =============================================================================

fn decimal(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn menu_item_id(id: u128) -> MenuItemId {
    MenuItemId::from_uuid(Uuid::from_u128(id))
}

fn menu_item(id: u128, name: &str, base_price: &str, has_size_options: bool) -> MenuItem {
    MenuItem::new(
        menu_item_id(id),
        MenuCategory::Coffee,
        String50::create("Name", name).unwrap(),
        Price::create(decimal(base_price)).unwrap(),
        true,
        has_size_options,
        true,
        5,
        1,
    )
}

fn validated_line(
    item: MenuItem,
    quantity: u32,
    size: Option<DrinkSize>,
    extra_shots: u32,
) -> ValidatedOrderLine {
    ValidatedOrderLine::new(
        item,
        OrderQuantity::create("Quantity", quantity).unwrap(),
        size,
        None::<MilkType>,
        ExtraShots::create("ExtraShots", extra_shots).unwrap(),
        None,
    )
}

fn validated_order(lines: Vec<ValidatedOrderLine>) -> ValidatedOrder {
    ValidatedOrder::new(
        CustomerInfo::create("Aiko", "").unwrap(),
        PaymentMethod::Cash,
        None,
        lines,
    )
}

/// Size-modifier lookup that knows no configured adjustments
fn no_modifiers(_: &MenuItemId, _: DrinkSize) -> Option<PriceModifier> {
    None
}

// =============================================================================
// price_line
// =============================================================================

#[rstest]
fn test_plain_line_uses_base_price() {
    let line = validated_line(menu_item(1, "Espresso", "5.00", false), 1, None, 0);

    let priced = price_line(&no_modifiers, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal("5.00"));
    assert_eq!(priced.line_total().value(), decimal("5.00"));
}

#[rstest]
fn test_size_modifier_is_added_when_configured() {
    let line = validated_line(
        menu_item(1, "Latte", "4.50", true),
        1,
        Some(DrinkSize::Medium),
        0,
    );
    let lookup = |_: &MenuItemId, size: DrinkSize| {
        (size == DrinkSize::Medium).then(|| PriceModifier::create(decimal("1.00")).unwrap())
    };

    let priced = price_line(&lookup, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal("5.50"));
}

#[rstest]
fn test_negative_size_modifier_discounts() {
    let line = validated_line(
        menu_item(1, "Latte", "4.50", true),
        1,
        Some(DrinkSize::Small),
        0,
    );
    let lookup =
        |_: &MenuItemId, _: DrinkSize| Some(PriceModifier::create(decimal("-0.50")).unwrap());

    let priced = price_line(&lookup, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal("4.00"));
}

#[rstest]
fn test_unconfigured_size_is_recorded_but_not_priced() {
    let line = validated_line(
        menu_item(1, "Latte", "4.50", true),
        1,
        Some(DrinkSize::Large),
        0,
    );

    let priced = price_line(&no_modifiers, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal("4.50"));
    assert_eq!(priced.size(), Some(DrinkSize::Large));
}

#[rstest]
fn test_size_on_item_without_size_options_is_not_priced() {
    // A modifier row exists, but the item does not support sizes
    let line = validated_line(
        menu_item(1, "Espresso", "3.00", false),
        1,
        Some(DrinkSize::Large),
        0,
    );
    let lookup =
        |_: &MenuItemId, _: DrinkSize| Some(PriceModifier::create(decimal("2.00")).unwrap());

    let priced = price_line(&lookup, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal("3.00"));
    assert_eq!(priced.size(), Some(DrinkSize::Large));
}

#[rstest]
#[case(1, "5.75")]
#[case(2, "6.50")]
#[case(4, "8.00")]
fn test_extra_shots_priced_at_75_cents_each(#[case] shots: u32, #[case] expected: &str) {
    let line = validated_line(menu_item(1, "Latte", "5.00", false), 1, None, shots);

    let priced = price_line(&no_modifiers, &line).unwrap();

    assert_eq!(priced.unit_price().value(), decimal(expected));
}

#[rstest]
fn test_unit_price_is_floored_at_zero() {
    let line = validated_line(
        menu_item(1, "Sample Shot", "0.25", true),
        3,
        Some(DrinkSize::Small),
        0,
    );
    let lookup =
        |_: &MenuItemId, _: DrinkSize| Some(PriceModifier::create(decimal("-0.50")).unwrap());

    let priced = price_line(&lookup, &line).unwrap();

    assert_eq!(priced.unit_price().value(), Decimal::ZERO);
    assert_eq!(priced.line_total().value(), Decimal::ZERO);
}

#[rstest]
fn test_line_total_multiplies_by_quantity() {
    let line = validated_line(menu_item(1, "Latte", "4.50", false), 3, None, 1);

    let priced = price_line(&no_modifiers, &line).unwrap();

    // 4.50 + 0.75 = 5.25 per unit, 15.75 for three
    assert_eq!(priced.unit_price().value(), decimal("5.25"));
    assert_eq!(priced.line_total().value(), decimal("15.75"));
}

// =============================================================================
// price_order scenarios
// =============================================================================

#[rstest]
fn test_scenario_plain_single_line() {
    // base 5.00, no size, no milk, no shots, qty 1 -> tax 0.50, total 5.50
    let order = validated_order(vec![validated_line(
        menu_item(1, "Drip Coffee", "5.00", false),
        1,
        None,
        0,
    )]);

    let priced = price_order(&no_modifiers, &order).unwrap();

    assert_eq!(priced.subtotal().value(), decimal("5.00"));
    assert_eq!(priced.tax_amount().value(), decimal("0.50"));
    assert_eq!(priced.total_amount().value(), decimal("5.50"));
}

#[rstest]
fn test_scenario_medium_size_modifier() {
    // base 4.50 + medium 1.00 -> unit 5.50, total 6.05
    let order = validated_order(vec![validated_line(
        menu_item(1, "Latte", "4.50", true),
        1,
        Some(DrinkSize::Medium),
        0,
    )]);
    let lookup =
        |_: &MenuItemId, _: DrinkSize| Some(PriceModifier::create(decimal("1.00")).unwrap());

    let priced = price_order(&lookup, &order).unwrap();

    assert_eq!(priced.lines()[0].unit_price().value(), decimal("5.50"));
    assert_eq!(priced.total_amount().value(), decimal("6.05"));
}

#[rstest]
fn test_scenario_two_extra_shots() {
    // base 5.00 + 2 shots -> unit 6.50, total 7.15
    let order = validated_order(vec![validated_line(
        menu_item(1, "Latte", "5.00", false),
        1,
        None,
        2,
    )]);

    let priced = price_order(&no_modifiers, &order).unwrap();

    assert_eq!(priced.lines()[0].unit_price().value(), decimal("6.50"));
    assert_eq!(priced.tax_amount().value(), decimal("0.65"));
    assert_eq!(priced.total_amount().value(), decimal("7.15"));
}

#[rstest]
fn test_scenario_two_line_order() {
    // line1: 5.00 x 1; line2: (4.50 + 2.00 + 0.75) x 2 = 14.50
    // subtotal 19.50, tax 1.95, total 21.45
    let order = validated_order(vec![
        validated_line(menu_item(1, "Drip Coffee", "5.00", false), 1, None, 0),
        validated_line(
            menu_item(2, "Latte", "4.50", true),
            2,
            Some(DrinkSize::Large),
            1,
        ),
    ]);
    let lookup = |id: &MenuItemId, size: DrinkSize| {
        (*id == menu_item_id(2) && size == DrinkSize::Large)
            .then(|| PriceModifier::create(decimal("2.00")).unwrap())
    };

    let priced = price_order(&lookup, &order).unwrap();

    assert_eq!(priced.lines()[1].unit_price().value(), decimal("7.25"));
    assert_eq!(priced.lines()[1].line_total().value(), decimal("14.50"));
    assert_eq!(priced.subtotal().value(), decimal("19.50"));
    assert_eq!(priced.tax_amount().value(), decimal("1.95"));
    assert_eq!(priced.total_amount().value(), decimal("21.45"));
}

#[rstest]
fn test_tax_is_rounded_to_two_decimals() {
    // subtotal 3.75 -> raw tax 0.375, rounded half-up to 0.38
    let order = validated_order(vec![validated_line(
        menu_item(1, "Espresso", "3.75", false),
        1,
        None,
        0,
    )]);

    let priced = price_order(&no_modifiers, &order).unwrap();

    assert_eq!(priced.tax_amount().value(), decimal("0.38"));
    assert_eq!(priced.total_amount().value(), decimal("4.13"));
}

#[rstest]
fn test_total_equals_subtotal_plus_tax() {
    let order = validated_order(vec![
        validated_line(menu_item(1, "Latte", "4.35", true), 3, None, 2),
        validated_line(menu_item(2, "Espresso", "2.95", false), 2, None, 1),
    ]);

    let priced = price_order(&no_modifiers, &order).unwrap();

    assert_eq!(
        priced.total_amount().value(),
        priced.subtotal().value() + priced.tax_amount().value()
    );
}
