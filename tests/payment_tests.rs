//! Tests for the payment authorization stub
//!
//! The stub is deterministic: settlement-free methods complete
//! immediately, card-like methods stay processing.

use cafe_ordering::catalog::{MenuCategory, MenuItem};
use cafe_ordering::compound_types::CustomerInfo;
use cafe_ordering::payment::{PaymentGateway, StubPaymentGateway};
use cafe_ordering::simple_types::{
    ExtraShots, MenuItemId, OrderId, OrderNumber, OrderQuantity, PaymentMethod, PaymentStatus,
    Price, String50,
};
use cafe_ordering::workflow::{PlacedOrder, ValidatedOrder, ValidatedOrderLine, price_order};
use chrono::Utc;
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Test data factory
// =============================================================================

fn placed_order_with_method(payment_method: PaymentMethod) -> PlacedOrder {
    let menu_item = MenuItem::new(
        MenuItemId::from_uuid(Uuid::from_u128(1)),
        MenuCategory::Coffee,
        String50::create("Name", "Espresso").unwrap(),
        Price::create(Decimal::from_str("3.00").unwrap()).unwrap(),
        true,
        false,
        false,
        2,
        1,
    );
    let validated = ValidatedOrder::new(
        CustomerInfo::create("", "").unwrap(),
        payment_method,
        None,
        vec![ValidatedOrderLine::new(
            menu_item,
            OrderQuantity::create("Quantity", 1).unwrap(),
            None,
            None,
            ExtraShots::create("ExtraShots", 0).unwrap(),
            None,
        )],
    );
    let priced = price_order(&|_, _| None, &validated).unwrap();

    PlacedOrder::from_priced_order(
        &priced,
        OrderId::generate(),
        OrderNumber::generate(),
        Utc::now(),
    )
}

// =============================================================================
// StubPaymentGateway
// =============================================================================

#[rstest]
#[case(PaymentMethod::Cash, PaymentStatus::Completed)]
#[case(PaymentMethod::QrCode, PaymentStatus::Completed)]
#[case(PaymentMethod::CreditCard, PaymentStatus::Processing)]
#[case(PaymentMethod::MobileWallet, PaymentStatus::Processing)]
fn test_stub_authorization_by_method(
    #[case] payment_method: PaymentMethod,
    #[case] expected: PaymentStatus,
) {
    let gateway = StubPaymentGateway::new();
    let order = placed_order_with_method(payment_method);

    assert_eq!(gateway.authorize(&order), expected);
}

#[rstest]
fn test_stub_is_deterministic() {
    let gateway = StubPaymentGateway::new();
    let order = placed_order_with_method(PaymentMethod::QrCode);

    let first = gateway.authorize(&order);
    let second = gateway.authorize(&order);

    assert_eq!(first, second);
}

#[rstest]
fn test_stub_works_through_trait_object() {
    let gateway: Box<dyn PaymentGateway> = Box::new(StubPaymentGateway::new());
    let order = placed_order_with_method(PaymentMethod::CreditCard);

    assert_eq!(gateway.authorize(&order), PaymentStatus::Processing);
}
