//! API layer tests
//!
//! Exercises `place_order_api` against the demo dependencies and the
//! axum handlers called directly, the same way the server wires them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cafe_ordering::api::{Dependencies, HttpRequest, place_order_api};
use cafe_ordering::api::axum_handler::{
    authorize_payment_handler, get_order_handler, place_order_handler, update_status_handler,
};
use cafe_ordering::dto::{PlaceOrderErrorDto, PlacedOrderDto};
use rstest::rstest;

// =============================================================================
// Test helpers
// =============================================================================

/// Fixed demo-catalog UUID for Caffè Latte (size pricing, 3-shot max)
const LATTE_ID: &str = "00000000-0000-0000-0000-000000000002";

/// Fixed demo-catalog UUID for Espresso (no sizes, 2-shot max)
const ESPRESSO_ID: &str = "00000000-0000-0000-0000-000000000001";

fn order_json(menu_item_id: &str, quantity: u32, size: &str, extra_shots: u32) -> String {
    serde_json::json!({
        "customer_name": "Aiko",
        "payment_method": "cash",
        "lines": [{
            "menu_item_id": menu_item_id,
            "quantity": quantity,
            "size": size,
            "extra_shots": extra_shots,
        }],
    })
    .to_string()
}

fn place(dependencies: &Dependencies, body: String) -> (u16, String) {
    let response = place_order_api(dependencies, &HttpRequest::new(body));
    (response.status_code(), response.body().to_string())
}

// =============================================================================
// place_order_api
// =============================================================================

#[rstest]
fn test_valid_order_returns_201_with_priced_body() {
    let dependencies = Dependencies::demo();

    let (status, body) = place(&dependencies, order_json(LATTE_ID, 1, "large", 1));

    assert_eq!(status, 201);

    let dto: PlacedOrderDto = serde_json::from_str(&body).unwrap();
    // 4.50 + 1.00 (large) + 0.75 = 6.25; tax 0.63; total 6.88
    assert_eq!(dto.total_amount.to_string(), "6.88");
    assert_eq!(dto.status, "pending");
    assert!(dto.order_number.starts_with("ORD-"));
    assert_eq!(dto.items.len(), 1);
    assert_eq!(dto.items[0].unit_price.to_string(), "6.25");
}

#[rstest]
fn test_malformed_json_returns_400() {
    let dependencies = Dependencies::demo();

    let (status, body) = place(&dependencies, "{ not json }".to_string());

    assert_eq!(status, 400);

    let dto: PlaceOrderErrorDto = serde_json::from_str(&body).unwrap();
    assert!(matches!(dto, PlaceOrderErrorDto::Validation { .. }));
}

#[rstest]
fn test_unknown_item_returns_404() {
    let dependencies = Dependencies::demo();
    let unknown = "00000000-0000-0000-0000-00000000ffff";

    let (status, body) = place(&dependencies, order_json(unknown, 1, "", 0));

    assert_eq!(status, 404);
    assert!(body.contains(unknown));
}

#[rstest]
fn test_excessive_extra_shots_returns_422() {
    let dependencies = Dependencies::demo();

    let (status, body) = place(&dependencies, order_json(ESPRESSO_ID, 1, "", 3));

    assert_eq!(status, 422);

    let dto: PlaceOrderErrorDto = serde_json::from_str(&body).unwrap();
    assert_eq!(
        dto,
        PlaceOrderErrorDto::LimitExceeded {
            name: "Espresso".to_string(),
            max_extra_shots: 2,
        }
    );
}

#[rstest]
fn test_unknown_payment_method_returns_400() {
    let dependencies = Dependencies::demo();
    let body = serde_json::json!({
        "payment_method": "barter",
        "lines": [{"menu_item_id": LATTE_ID, "quantity": 1}],
    })
    .to_string();

    let (status, _) = place(&dependencies, body);

    assert_eq!(status, 400);
}

#[rstest]
fn test_empty_cart_returns_400() {
    let dependencies = Dependencies::demo();
    let body = serde_json::json!({
        "payment_method": "cash",
        "lines": [],
    })
    .to_string();

    let (status, _) = place(&dependencies, body);

    assert_eq!(status, 400);
}

// =============================================================================
// axum handlers
// =============================================================================

#[tokio::test]
async fn test_place_order_handler_returns_created() {
    let dependencies = Dependencies::demo();

    let response =
        place_order_handler(State(dependencies), order_json(LATTE_ID, 1, "", 0)).await;

    assert_eq!(response.into_response().status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_get_order_handler_round_trip() {
    let dependencies = Dependencies::demo();
    let (_, body) = place(&dependencies, order_json(LATTE_ID, 1, "", 0));
    let placed: PlacedOrderDto = serde_json::from_str(&body).unwrap();

    let response = get_order_handler(
        State(dependencies.clone()),
        Path(placed.order_number.clone()),
    )
    .await;

    assert_eq!(response.into_response().status(), StatusCode::OK);

    let missing = get_order_handler(State(dependencies), Path("ORD-MISSING".to_string())).await;

    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_handler_enforces_lifecycle() {
    let dependencies = Dependencies::demo();
    let (_, body) = place(&dependencies, order_json(LATTE_ID, 1, "", 0));
    let placed: PlacedOrderDto = serde_json::from_str(&body).unwrap();

    let confirmed = update_status_handler(
        State(dependencies.clone()),
        Path(placed.order_number.clone()),
        r#"{"status": "confirmed"}"#.to_string(),
    )
    .await;
    assert_eq!(confirmed.into_response().status(), StatusCode::OK);

    // confirmed -> ready skips preparing
    let skipped = update_status_handler(
        State(dependencies),
        Path(placed.order_number),
        r#"{"status": "ready"}"#.to_string(),
    )
    .await;
    assert_eq!(skipped.into_response().status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_authorize_payment_handler_completes_cash_orders() {
    let dependencies = Dependencies::demo();
    let (_, body) = place(&dependencies, order_json(LATTE_ID, 1, "", 0));
    let placed: PlacedOrderDto = serde_json::from_str(&body).unwrap();

    let response = authorize_payment_handler(
        State(dependencies),
        Path(placed.order_number),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
}
