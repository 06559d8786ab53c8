//! Transport-agnostic place-order entry point
//!
//! Parses the request body, runs the `PlaceOrder` workflow against the
//! injected dependencies, and maps the outcome to an abstract HTTP
//! response. The axum handler is a thin wrapper around this function,
//! which keeps the whole request path testable without a running
//! server.

use crate::api::dependencies::Dependencies;
use crate::api::types::{HttpRequest, HttpResponse};
use crate::dto::{OrderFormDto, PlaceOrderErrorDto, PlacedOrderDto};
use crate::workflow::{PlaceOrderError, place_order};

// =============================================================================
// error_status_code
// =============================================================================

/// Maps a workflow error to an HTTP status code
///
/// - `Validation` → 400 (malformed input)
/// - `NotFound` → 404
/// - `Unavailable` / `LimitExceeded` / `Pricing` → 422 (well-formed but
///   unprocessable)
/// - `Persistence` → 500
#[must_use]
pub fn error_status_code(error: &PlaceOrderError) -> u16 {
    match error {
        PlaceOrderError::Validation(_) => 400,
        PlaceOrderError::NotFound { .. } => 404,
        PlaceOrderError::Unavailable { .. }
        | PlaceOrderError::LimitExceeded { .. }
        | PlaceOrderError::Pricing(_) => 422,
        PlaceOrderError::Persistence(_) => 500,
    }
}

// =============================================================================
// place_order_api
// =============================================================================

/// Handles one place-order request
///
/// # Arguments
///
/// * `dependencies` - Catalog and store the workflow runs against
/// * `request` - The raw HTTP request
///
/// # Returns
///
/// - 201 with a [`PlacedOrderDto`] body on success
/// - 400 with a [`PlaceOrderErrorDto`] body when the JSON cannot be
///   parsed or a field is malformed
/// - 404 / 422 / 500 per [`error_status_code`] for workflow errors
///
/// # Examples
///
/// ```
/// use cafe_ordering::api::{Dependencies, HttpRequest, place_order_api};
///
/// let dependencies = Dependencies::demo();
/// let request = HttpRequest::new("{ not json }".to_string());
///
/// let response = place_order_api(&dependencies, &request);
/// assert_eq!(response.status_code(), 400);
/// ```
#[must_use]
pub fn place_order_api(dependencies: &Dependencies, request: &HttpRequest) -> HttpResponse {
    let order_form: OrderFormDto = match serde_json::from_str(request.body()) {
        Ok(form) => form,
        Err(error) => {
            let dto = PlaceOrderErrorDto::Validation {
                field_name: "RequestBody".to_string(),
                message: error.to_string(),
            };
            return HttpResponse::new(400, to_json(&dto));
        }
    };

    let unvalidated_order = order_form.to_unvalidated_order();

    let catalog = dependencies.catalog();
    let store = dependencies.store();

    let result = place_order(
        &|menu_item_id| catalog.find_item(menu_item_id).cloned(),
        &|menu_item_id, size| catalog.size_modifier(menu_item_id, size),
        &|order| store.insert(order),
        &unvalidated_order,
    );

    match result {
        Ok(placed_order) => {
            tracing::info!(
                order_number = placed_order.order_number().value(),
                total_amount = %placed_order.total_amount().value(),
                "order placed"
            );
            HttpResponse::new(201, to_json(&PlacedOrderDto::from_domain(&placed_order)))
        }
        Err(error) => {
            if error.is_persistence() {
                tracing::error!(%error, "order could not be persisted");
            }
            HttpResponse::new(
                error_status_code(&error),
                to_json(&PlaceOrderErrorDto::from_domain(&error)),
            )
        }
    }
}

/// Serializes a response body, falling back to an empty object
///
/// Serialization of our own DTOs cannot realistically fail; the
/// fallback keeps the response well-formed JSON if it ever does.
fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
