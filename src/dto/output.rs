//! Output DTOs
//!
//! Defines types for serializing API responses.
//!
//! Money fields serialize as strings (`"5.50"`) via
//! `rust_decimal::serde::str`, so clients never receive binary floating
//! point artifacts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{OrderItem, PlacedOrder};

// =============================================================================
// OrderItemDto
// =============================================================================

/// Persisted order line item DTO
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::OrderItemDto;
///
/// let json = r#"{
///     "menu_item_id": "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10",
///     "name": "Caffè Latte",
///     "quantity": 2,
///     "size": "large",
///     "milk_type": null,
///     "extra_shots": 1,
///     "unit_price": "6.25",
///     "total_price": "12.50",
///     "special_instructions": null
/// }"#;
///
/// let dto: OrderItemDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.name, "Caffè Latte");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDto {
    /// Menu item reference
    pub menu_item_id: String,
    /// Item name snapshot
    pub name: String,
    /// Quantity
    pub quantity: u32,
    /// Recorded size, if any
    pub size: Option<String>,
    /// Recorded milk type, if any
    pub milk_type: Option<String>,
    /// Extra shot count
    pub extra_shots: u32,
    /// Computed unit price
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Computed line total
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    /// Line instructions, if any
    pub special_instructions: Option<String>,
}

impl OrderItemDto {
    /// Creates an `OrderItemDto` from the domain `OrderItem`
    ///
    /// Converts to DTO as a pure function.
    #[must_use]
    pub fn from_domain(item: &OrderItem) -> Self {
        Self {
            menu_item_id: item.menu_item_id().value().to_string(),
            name: item.name().value().to_string(),
            quantity: item.quantity().value(),
            size: item.size().map(|size| size.value().to_string()),
            milk_type: item.milk_type().map(|milk| milk.value().to_string()),
            extra_shots: item.extra_shots().value(),
            unit_price: item.unit_price().value(),
            total_price: item.total_price().value(),
            special_instructions: item
                .special_instructions()
                .map(|instructions| instructions.value().to_string()),
        }
    }
}

// =============================================================================
// PlacedOrderDto
// =============================================================================

/// Persisted order DTO
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrderDto {
    /// Internal order id
    pub id: String,
    /// Customer-facing order number
    pub order_number: String,
    /// Lifecycle status
    pub status: String,
    /// Customer name, if provided
    pub customer_name: Option<String>,
    /// Customer phone, if provided
    pub customer_phone: Option<String>,
    /// Order-level instructions, if any
    pub special_instructions: Option<String>,
    /// Chosen payment method
    pub payment_method: String,
    /// Tax amount
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_amount: Decimal,
    /// Total amount (subtotal + tax)
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    /// Estimated ready time, when set
    pub estimated_ready_time: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Persisted line items
    pub items: Vec<OrderItemDto>,
}

impl PlacedOrderDto {
    /// Creates a `PlacedOrderDto` from the domain `PlacedOrder`
    ///
    /// Converts to DTO as a pure function.
    #[must_use]
    pub fn from_domain(order: &PlacedOrder) -> Self {
        Self {
            id: order.id().value().to_string(),
            order_number: order.order_number().value().to_string(),
            status: order.status().value().to_string(),
            customer_name: order
                .customer()
                .name()
                .map(|name| name.value().to_string()),
            customer_phone: order
                .customer()
                .phone()
                .map(|phone| phone.value().to_string()),
            special_instructions: order
                .special_instructions()
                .map(|instructions| instructions.value().to_string()),
            payment_method: order.payment_method().value().to_string(),
            tax_amount: order.tax_amount().value(),
            total_amount: order.total_amount().value(),
            estimated_ready_time: order.estimated_ready_time(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
            items: order.items().iter().map(OrderItemDto::from_domain).collect(),
        }
    }
}

// =============================================================================
// PaymentResultDto
// =============================================================================

/// Payment authorization result DTO
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::PaymentResultDto;
///
/// let json = r#"{
///     "order_number": "ORD-20260101000000-AAAAAA",
///     "payment_method": "cash",
///     "payment_status": "completed"
/// }"#;
///
/// let dto: PaymentResultDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.payment_status, "completed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResultDto {
    /// The order the authorization applies to
    pub order_number: String,
    /// The method that was authorized
    pub payment_method: String,
    /// The resulting payment status
    pub payment_status: String,
}
