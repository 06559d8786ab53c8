//! Tests for the validation module
//!
//! Covers field-shape validation and the catalog preconditions in their
//! specified order: existence, availability, extra-shot limit.

use cafe_ordering::catalog::{MenuCatalog, MenuCategory, MenuItem};
use cafe_ordering::simple_types::{DrinkSize, MenuItemId, MilkType, PaymentMethod, Price, String50};
use cafe_ordering::workflow::{
    PlaceOrderError, UnvalidatedOrder, UnvalidatedOrderLine, validate_order,
};
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Test data factory
// =============================================================================

fn menu_item_id(id: u128) -> MenuItemId {
    MenuItemId::from_uuid(Uuid::from_u128(id))
}

fn menu_item(id: u128, name: &str, available: bool, max_extra_shots: u32) -> MenuItem {
    MenuItem::new(
        menu_item_id(id),
        MenuCategory::Coffee,
        String50::create("Name", name).unwrap(),
        Price::create(Decimal::from_str("4.50").unwrap()).unwrap(),
        available,
        true,
        true,
        max_extra_shots,
        1,
    )
}

fn catalog() -> MenuCatalog {
    MenuCatalog::new()
        .with_item(menu_item(1, "Caffè Latte", true, 3))
        .with_item(menu_item(2, "Seasonal Special", false, 3))
}

fn line(menu_item_id: &str, quantity: u32, extra_shots: u32) -> UnvalidatedOrderLine {
    UnvalidatedOrderLine::new(
        menu_item_id.to_string(),
        quantity,
        String::new(),
        String::new(),
        extra_shots,
        String::new(),
    )
}

fn order(lines: Vec<UnvalidatedOrderLine>) -> UnvalidatedOrder {
    UnvalidatedOrder::new(
        "Aiko".to_string(),
        "090-1234-5678".to_string(),
        String::new(),
        "cash".to_string(),
        lines,
    )
}

fn lookup(id: &MenuItemId) -> Option<MenuItem> {
    catalog().find_item(id).cloned()
}

fn latte_id_string() -> String {
    menu_item_id(1).value().to_string()
}

// =============================================================================
// Happy path
// =============================================================================

#[rstest]
fn test_valid_order_passes() {
    let valid_line = UnvalidatedOrderLine::new(
        latte_id_string(),
        2,
        "large".to_string(),
        "oat".to_string(),
        1,
        "extra hot".to_string(),
    );

    let validated = validate_order(&lookup, &order(vec![valid_line])).unwrap();

    assert_eq!(validated.payment_method(), PaymentMethod::Cash);
    assert_eq!(validated.lines().len(), 1);

    let validated_line = &validated.lines()[0];
    assert_eq!(validated_line.menu_item().name().value(), "Caffè Latte");
    assert_eq!(validated_line.size(), Some(DrinkSize::Large));
    assert_eq!(validated_line.milk_type(), Some(MilkType::Oat));
    assert_eq!(validated_line.extra_shots().value(), 1);
    assert_eq!(
        validated_line
            .special_instructions()
            .map(|instructions| instructions.value()),
        Some("extra hot")
    );
}

#[rstest]
fn test_anonymous_customer_is_accepted() {
    let anonymous = UnvalidatedOrder::new(
        String::new(),
        String::new(),
        String::new(),
        "qr_code".to_string(),
        vec![line(&latte_id_string(), 1, 0)],
    );

    let validated = validate_order(&lookup, &anonymous).unwrap();

    assert!(validated.customer().name().is_none());
    assert!(validated.customer().phone().is_none());
}

// =============================================================================
// Catalog preconditions, in order
// =============================================================================

#[rstest]
fn test_unknown_item_is_not_found() {
    let unknown = menu_item_id(99).value().to_string();

    let error = validate_order(&lookup, &order(vec![line(&unknown, 1, 0)])).unwrap_err();

    assert!(error.is_not_found());
    assert!(error.to_string().contains(&unknown));
}

#[rstest]
fn test_unavailable_item_is_rejected_with_name() {
    let unavailable = menu_item_id(2).value().to_string();

    let error = validate_order(&lookup, &order(vec![line(&unavailable, 1, 0)])).unwrap_err();

    assert_eq!(error, PlaceOrderError::unavailable("Seasonal Special"));
}

#[rstest]
fn test_extra_shots_at_maximum_succeeds() {
    let result = validate_order(&lookup, &order(vec![line(&latte_id_string(), 1, 3)]));

    assert!(result.is_ok());
}

#[rstest]
fn test_extra_shots_above_maximum_is_limit_exceeded() {
    let error = validate_order(&lookup, &order(vec![line(&latte_id_string(), 1, 4)])).unwrap_err();

    assert_eq!(error, PlaceOrderError::limit_exceeded("Caffè Latte", 3));
}

#[rstest]
fn test_existence_is_checked_before_field_shape() {
    // Unknown item and zero quantity on the same line: existence wins
    let unknown = menu_item_id(99).value().to_string();

    let error = validate_order(&lookup, &order(vec![line(&unknown, 0, 0)])).unwrap_err();

    assert!(error.is_not_found());
}

#[rstest]
fn test_availability_is_checked_before_shot_limit() {
    // Unavailable item with excessive shots: availability wins
    let unavailable = menu_item_id(2).value().to_string();

    let error = validate_order(&lookup, &order(vec![line(&unavailable, 1, 9)])).unwrap_err();

    assert!(error.is_unavailable());
}

#[rstest]
fn test_first_failing_line_aborts() {
    let lines = vec![
        line(&latte_id_string(), 1, 0),
        line(&menu_item_id(2).value().to_string(), 1, 0),
        line(&menu_item_id(99).value().to_string(), 1, 0),
    ];

    let error = validate_order(&lookup, &order(lines)).unwrap_err();

    // The second line (unavailable) fails before the third (not found)
    assert!(error.is_unavailable());
}

// =============================================================================
// Field-shape validation
// =============================================================================

#[rstest]
fn test_empty_cart_is_rejected() {
    let error = validate_order(&lookup, &order(vec![])).unwrap_err();

    assert!(error.is_validation());
    assert!(error.to_string().contains("Lines"));
}

#[rstest]
fn test_malformed_menu_item_id_is_validation_error() {
    let error = validate_order(&lookup, &order(vec![line("latte", 1, 0)])).unwrap_err();

    assert!(error.is_validation());
}

#[rstest]
fn test_zero_quantity_is_rejected() {
    let error = validate_order(&lookup, &order(vec![line(&latte_id_string(), 0, 0)])).unwrap_err();

    assert!(error.is_validation());
    assert!(error.to_string().contains("Quantity"));
}

#[rstest]
fn test_unknown_size_is_rejected() {
    let bad_size = UnvalidatedOrderLine::new(
        latte_id_string(),
        1,
        "venti".to_string(),
        String::new(),
        0,
        String::new(),
    );

    let error = validate_order(&lookup, &order(vec![bad_size])).unwrap_err();

    assert!(error.is_validation());
}

#[rstest]
fn test_unknown_payment_method_is_rejected() {
    let bad_payment = UnvalidatedOrder::new(
        String::new(),
        String::new(),
        String::new(),
        "barter".to_string(),
        vec![line(&latte_id_string(), 1, 0)],
    );

    let error = validate_order(&lookup, &bad_payment).unwrap_err();

    assert!(error.is_validation());
    assert!(error.to_string().contains("PaymentMethod"));
}

#[rstest]
fn test_malformed_phone_is_rejected() {
    let bad_phone = UnvalidatedOrder::new(
        "Aiko".to_string(),
        "call me maybe".to_string(),
        String::new(),
        "cash".to_string(),
        vec![line(&latte_id_string(), 1, 0)],
    );

    let error = validate_order(&lookup, &bad_phone).unwrap_err();

    assert!(error.is_validation());
}
