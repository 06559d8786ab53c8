//! Persisted order types
//!
//! The output of the `PlaceOrder` workflow: the order row and its line
//! item rows as they are written to the store. Both are created once;
//! only the order's status and `updated_at` change afterwards, through
//! the store's status-update operation.

use chrono::{DateTime, Utc};

use crate::compound_types::CustomerInfo;
use crate::simple_types::{
    BillingAmount, DrinkSize, ExtraShots, MenuItemId, MilkType, OrderId, OrderNumber,
    OrderQuantity, OrderStatus, PaymentMethod, Price, SpecialInstructions, String50,
};

use super::priced_types::{PricedOrder, PricedOrderLine};

// =============================================================================
// OrderItem
// =============================================================================

/// A persisted order line item
///
/// Immutable once created. Carries the item name as a snapshot so that
/// later menu edits do not rewrite order history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderItem {
    order_id: OrderId,
    menu_item_id: MenuItemId,
    name: String50,
    quantity: OrderQuantity,
    size: Option<DrinkSize>,
    milk_type: Option<MilkType>,
    extra_shots: ExtraShots,
    unit_price: Price,
    total_price: BillingAmount,
    special_instructions: Option<SpecialInstructions>,
}

impl OrderItem {
    /// Creates an `OrderItem` from a priced line
    ///
    /// # Arguments
    ///
    /// * `order_id` - The owning order
    /// * `line` - The priced line to materialize
    #[must_use]
    pub fn from_priced_line(order_id: OrderId, line: &PricedOrderLine) -> Self {
        Self {
            order_id,
            menu_item_id: line.menu_item_id(),
            name: line.name().clone(),
            quantity: line.quantity(),
            size: line.size(),
            milk_type: line.milk_type(),
            extra_shots: line.extra_shots(),
            unit_price: line.unit_price(),
            total_price: line.line_total(),
            special_instructions: line.special_instructions().cloned(),
        }
    }

    /// Returns the owning order id
    #[must_use]
    pub const fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Returns the menu item reference
    #[must_use]
    pub const fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    /// Returns the item name snapshot
    #[must_use]
    pub const fn name(&self) -> &String50 {
        &self.name
    }

    /// Returns the quantity
    #[must_use]
    pub const fn quantity(&self) -> OrderQuantity {
        self.quantity
    }

    /// Returns the recorded size, if any
    #[must_use]
    pub const fn size(&self) -> Option<DrinkSize> {
        self.size
    }

    /// Returns the recorded milk type, if any
    #[must_use]
    pub const fn milk_type(&self) -> Option<MilkType> {
        self.milk_type
    }

    /// Returns the extra shot count
    #[must_use]
    pub const fn extra_shots(&self) -> ExtraShots {
        self.extra_shots
    }

    /// Returns the unit price
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns `unit_price × quantity`
    #[must_use]
    pub const fn total_price(&self) -> BillingAmount {
        self.total_price
    }

    /// Returns the line instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }
}

// =============================================================================
// PlacedOrder
// =============================================================================

/// A persisted order with its line items
///
/// Created atomically with its items by the `PlaceOrder` workflow with
/// status [`OrderStatus::Pending`] and no estimated ready time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedOrder {
    id: OrderId,
    order_number: OrderNumber,
    status: OrderStatus,
    customer: CustomerInfo,
    payment_method: PaymentMethod,
    special_instructions: Option<SpecialInstructions>,
    tax_amount: BillingAmount,
    total_amount: BillingAmount,
    estimated_ready_time: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    items: Vec<OrderItem>,
}

impl PlacedOrder {
    /// Materializes a `PlacedOrder` from a priced order
    ///
    /// Initial status is always `pending` and `estimated_ready_time`
    /// starts out unset; both belong to the later status-update
    /// operations.
    ///
    /// # Arguments
    ///
    /// * `priced_order` - The priced order to materialize
    /// * `id` - Generated order id
    /// * `order_number` - Generated order number
    /// * `created_at` - Creation timestamp (also the initial `updated_at`)
    #[must_use]
    pub fn from_priced_order(
        priced_order: &PricedOrder,
        id: OrderId,
        order_number: OrderNumber,
        created_at: DateTime<Utc>,
    ) -> Self {
        let items = priced_order
            .lines()
            .iter()
            .map(|line| OrderItem::from_priced_line(id, line))
            .collect();

        Self {
            id,
            order_number,
            status: OrderStatus::Pending,
            customer: priced_order.customer().clone(),
            payment_method: priced_order.payment_method(),
            special_instructions: priced_order.special_instructions().cloned(),
            tax_amount: priced_order.tax_amount(),
            total_amount: priced_order.total_amount(),
            estimated_ready_time: None,
            created_at,
            updated_at: created_at,
            items,
        }
    }

    /// Returns a copy of this order with a new status and update time
    ///
    /// Transition legality is the caller's responsibility; the store
    /// checks [`OrderStatus::can_transition_to`] before calling this.
    #[must_use]
    pub fn with_status(&self, status: OrderStatus, updated_at: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at,
            ..self.clone()
        }
    }

    /// Returns the internal order id
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the customer-facing order number
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Returns the current lifecycle status
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the customer information
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Returns the chosen payment method
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the order-level instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }

    /// Returns the tax amount
    #[must_use]
    pub const fn tax_amount(&self) -> BillingAmount {
        self.tax_amount
    }

    /// Returns the total amount (subtotal + tax)
    #[must_use]
    pub const fn total_amount(&self) -> BillingAmount {
        self.total_amount
    }

    /// Returns the estimated ready time, when one has been set
    #[must_use]
    pub const fn estimated_ready_time(&self) -> Option<DateTime<Utc>> {
        self.estimated_ready_time
    }

    /// Returns the creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the persisted line items
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}
