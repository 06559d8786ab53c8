//! axum ハンドラ
//!
//! axum フレームワーク用のハンドラ関数とルーターを提供する。
//! 各ハンドラは薄いラッパーであり、注文作成のロジックは
//! [`place_order_api`]、参照・更新のロジックはストアに委譲する。

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::dependencies::Dependencies;
use crate::api::place_order_api::place_order_api;
use crate::api::types::HttpRequest;
use crate::dto::{PaymentResultDto, PlacedOrderDto, StatusUpdateDto};
use crate::simple_types::{OrderNumber, OrderStatus};
use crate::store::StatusUpdateError;

/// JSON レスポンスを組み立てる
fn json_response(status_code: u16, body: String) -> impl IntoResponse {
    (
        StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// エラーメッセージのみの JSON ボディを組み立てる
fn error_body(message: &str) -> String {
    serde_json::json!({ "message": message }).to_string()
}

// =============================================================================
// POST /orders
// =============================================================================

/// POST /orders ハンドラ
///
/// JSON リクエストを受け取り、`place_order_api` を呼び出して
/// レスポンスを返す。
///
/// # Examples
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use cafe_ordering::api::axum_handler::place_order_handler;
///
/// let app: Router<cafe_ordering::api::Dependencies> =
///     Router::new().route("/orders", post(place_order_handler));
/// ```
pub async fn place_order_handler(
    State(dependencies): State<Dependencies>,
    body: String,
) -> impl IntoResponse {
    let request = HttpRequest::new(body);

    let response = place_order_api(&dependencies, &request);

    json_response(response.status_code(), response.body().to_string())
}

// =============================================================================
// GET /orders/{order_number}
// =============================================================================

/// GET /orders/{order_number} ハンドラ
///
/// 注文番号で注文を参照する。見つからない場合は 404 を返す。
pub async fn get_order_handler(
    State(dependencies): State<Dependencies>,
    Path(order_number): Path<String>,
) -> impl IntoResponse {
    let Ok(order_number) = OrderNumber::create("OrderNumber", &order_number) else {
        return json_response(400, error_body("Invalid order number"));
    };

    match dependencies.store().find_by_order_number(&order_number) {
        Ok(Some(order)) => {
            let body = serde_json::to_string(&PlacedOrderDto::from_domain(&order))
                .unwrap_or_else(|_| "{}".to_string());
            json_response(200, body)
        }
        Ok(None) => json_response(404, error_body("Order not found")),
        Err(error) => {
            tracing::error!(%error, "order lookup failed");
            json_response(500, error_body("Order could not be loaded"))
        }
    }
}

// =============================================================================
// POST /orders/{order_number}/status
// =============================================================================

/// POST /orders/{order_number}/status ハンドラ
///
/// 注文のライフサイクル遷移を適用する。不正な遷移は 409 を返す。
pub async fn update_status_handler(
    State(dependencies): State<Dependencies>,
    Path(order_number): Path<String>,
    body: String,
) -> impl IntoResponse {
    let Ok(order_number) = OrderNumber::create("OrderNumber", &order_number) else {
        return json_response(400, error_body("Invalid order number"));
    };

    let status_update: StatusUpdateDto = match serde_json::from_str(&body) {
        Ok(dto) => dto,
        Err(error) => return json_response(400, error_body(&error.to_string())),
    };

    let next = match OrderStatus::create("Status", &status_update.status) {
        Ok(status) => status,
        Err(error) => return json_response(400, error_body(&error.to_string())),
    };

    match dependencies.store().update_status(&order_number, next) {
        Ok(order) => {
            let body = serde_json::to_string(&PlacedOrderDto::from_domain(&order))
                .unwrap_or_else(|_| "{}".to_string());
            json_response(200, body)
        }
        Err(error @ StatusUpdateError::NotFound { .. }) => {
            json_response(404, error_body(&error.to_string()))
        }
        Err(error @ StatusUpdateError::InvalidTransition { .. }) => {
            json_response(409, error_body(&error.to_string()))
        }
        Err(error @ StatusUpdateError::Persistence(_)) => {
            tracing::error!(%error, "status update failed");
            json_response(500, error_body("Order could not be updated"))
        }
    }
}

// =============================================================================
// POST /orders/{order_number}/payment
// =============================================================================

/// POST /orders/{order_number}/payment ハンドラ
///
/// 注文の支払いを承認し、支払いステータスを返す。
pub async fn authorize_payment_handler(
    State(dependencies): State<Dependencies>,
    Path(order_number): Path<String>,
) -> impl IntoResponse {
    let Ok(order_number) = OrderNumber::create("OrderNumber", &order_number) else {
        return json_response(400, error_body("Invalid order number"));
    };

    match dependencies.store().find_by_order_number(&order_number) {
        Ok(Some(order)) => {
            let status = dependencies.gateway().authorize(&order);
            let dto = PaymentResultDto {
                order_number: order.order_number().value().to_string(),
                payment_method: order.payment_method().value().to_string(),
                payment_status: status.value().to_string(),
            };
            let body = serde_json::to_string(&dto).unwrap_or_else(|_| "{}".to_string());
            json_response(200, body)
        }
        Ok(None) => json_response(404, error_body("Order not found")),
        Err(error) => {
            tracing::error!(%error, "order lookup failed");
            json_response(500, error_body("Order could not be loaded"))
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// 注文 API のルーターを構築する
///
/// # Examples
///
/// ```
/// use cafe_ordering::api::{Dependencies, router};
///
/// let app = router(Dependencies::demo());
/// let _ = app;
/// ```
#[must_use]
pub fn router(dependencies: Dependencies) -> Router {
    Router::new()
        .route("/orders", post(place_order_handler))
        .route("/orders/{order_number}", get(get_order_handler))
        .route("/orders/{order_number}/status", post(update_status_handler))
        .route(
            "/orders/{order_number}/payment",
            post(authorize_payment_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(dependencies)
}
