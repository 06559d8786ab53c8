//! DTO のテスト
//!
//! 入力 DTO のデシリアライズ（省略フィールドの既定値）と、
//! 出力・エラー DTO のシリアライズ形式を検証する。

use cafe_ordering::dto::{OrderFormDto, PlaceOrderErrorDto, PlacedOrderDto, StatusUpdateDto};
use cafe_ordering::store::PersistenceError;
use cafe_ordering::workflow::PlaceOrderError;
use rstest::rstest;

// =============================================================================
// 入力 DTO
// =============================================================================

#[rstest]
fn test_order_form_optional_fields_default() {
    let json = r#"{
        "payment_method": "cash",
        "lines": [
            {"menu_item_id": "00000000-0000-0000-0000-000000000002", "quantity": 1}
        ]
    }"#;

    let dto: OrderFormDto = serde_json::from_str(json).unwrap();

    assert_eq!(dto.customer_name, "");
    assert_eq!(dto.customer_phone, "");
    assert_eq!(dto.special_instructions, "");
    assert_eq!(dto.lines[0].size, "");
    assert_eq!(dto.lines[0].milk_type, "");
    assert_eq!(dto.lines[0].extra_shots, 0);
}

#[rstest]
fn test_order_form_missing_payment_method_fails_to_parse() {
    let json = r#"{"lines": []}"#;

    let result: Result<OrderFormDto, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[rstest]
fn test_order_form_missing_lines_fails_to_parse() {
    let json = r#"{"payment_method": "cash"}"#;

    let result: Result<OrderFormDto, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[rstest]
fn test_order_form_converts_to_unvalidated_order() {
    let json = r#"{
        "customer_name": "Aiko",
        "payment_method": "qr_code",
        "lines": [
            {
                "menu_item_id": "00000000-0000-0000-0000-000000000002",
                "quantity": 2,
                "size": "large",
                "milk_type": "oat",
                "extra_shots": 1,
                "special_instructions": "extra hot"
            }
        ]
    }"#;

    let dto: OrderFormDto = serde_json::from_str(json).unwrap();
    let unvalidated = dto.to_unvalidated_order();

    assert_eq!(unvalidated.customer_name(), "Aiko");
    assert_eq!(unvalidated.payment_method(), "qr_code");
    assert_eq!(unvalidated.lines().len(), 1);
    assert_eq!(unvalidated.lines()[0].size(), "large");
    assert_eq!(unvalidated.lines()[0].extra_shots(), 1);
    assert_eq!(unvalidated.lines()[0].special_instructions(), "extra hot");
}

#[rstest]
fn test_status_update_dto_parses() {
    let dto: StatusUpdateDto = serde_json::from_str(r#"{"status": "preparing"}"#).unwrap();

    assert_eq!(dto.status, "preparing");
}

// =============================================================================
// エラー DTO
// =============================================================================

#[rstest]
fn test_not_found_error_dto_shape() {
    let dto = PlaceOrderErrorDto::from_domain(&PlaceOrderError::NotFound {
        menu_item_id: "00000000-0000-0000-0000-00000000002a".to_string(),
    });

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["type"], "NotFound");
    assert_eq!(json["menu_item_id"], "00000000-0000-0000-0000-00000000002a");
}

#[rstest]
fn test_limit_exceeded_error_dto_shape() {
    let dto = PlaceOrderErrorDto::from_domain(&PlaceOrderError::limit_exceeded("Caffè Latte", 3));

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["type"], "LimitExceeded");
    assert_eq!(json["name"], "Caffè Latte");
    assert_eq!(json["max_extra_shots"], 3);
}

#[rstest]
fn test_persistence_error_dto_hides_detail() {
    let error: PlaceOrderError =
        PersistenceError::storage("unique constraint orders_order_number_key").into();

    let dto = PlaceOrderErrorDto::from_domain(&error);
    let json = serde_json::to_string(&dto).unwrap();

    assert!(!json.contains("unique constraint"));
    assert!(json.contains(r#""type":"Persistence""#));
}

#[rstest]
fn test_error_dto_round_trips() {
    let dto = PlaceOrderErrorDto::Unavailable {
        name: "Seasonal Special".to_string(),
    };

    let json = serde_json::to_string(&dto).unwrap();
    let parsed: PlaceOrderErrorDto = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, dto);
}

// =============================================================================
// 出力 DTO
// =============================================================================

#[rstest]
fn test_placed_order_dto_serializes_money_as_strings() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-0000000000ff",
        "order_number": "ORD-20260808120000-AB12CD",
        "status": "pending",
        "customer_name": null,
        "customer_phone": null,
        "special_instructions": null,
        "payment_method": "cash",
        "tax_amount": "0.50",
        "total_amount": "5.50",
        "estimated_ready_time": null,
        "created_at": "2026-08-08T12:00:00Z",
        "updated_at": "2026-08-08T12:00:00Z",
        "items": []
    }"#;

    let dto: PlacedOrderDto = serde_json::from_str(json).unwrap();
    let serialized = serde_json::to_value(&dto).unwrap();

    assert_eq!(serialized["total_amount"], "5.50");
    assert_eq!(serialized["tax_amount"], "0.50");
    assert_eq!(serialized["status"], "pending");
}
