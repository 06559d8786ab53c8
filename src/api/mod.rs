//! API layer
//!
//! Exposes the `PlaceOrder` workflow and the order read/update
//! operations over HTTP.
//!
//! # Module Structure
//!
//! - [`types`] - Abstract HTTP request/response types
//! - [`dependencies`] - Dependency wiring (`Dependencies`, demo catalog)
//! - [`place_order_api`] - Transport-agnostic place-order entry point
//! - [`axum_handler`] - axum handlers and router

pub mod axum_handler;
pub mod dependencies;
pub mod place_order_api;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use axum_handler::router;
pub use dependencies::{Dependencies, demo_catalog};
pub use place_order_api::{error_status_code, place_order_api};
pub use types::{HttpRequest, HttpResponse};
