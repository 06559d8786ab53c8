//! Priced types
//!
//! Produced by [`pricing`](crate::workflow::pricing). Every line carries
//! its computed unit price and line total; the order carries subtotal,
//! tax and total. All amounts are rounded to 2 decimal places.

use crate::compound_types::CustomerInfo;
use crate::simple_types::{
    BillingAmount, DrinkSize, ExtraShots, MenuItemId, MilkType, OrderQuantity, PaymentMethod,
    Price, SpecialInstructions, String50,
};

// =============================================================================
// PricedOrderLine
// =============================================================================

/// One priced cart line
///
/// `unit_price` is the base price adjusted for size and extra shots,
/// floored at zero; `line_total` is `unit_price × quantity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderLine {
    menu_item_id: MenuItemId,
    name: String50,
    quantity: OrderQuantity,
    size: Option<DrinkSize>,
    milk_type: Option<MilkType>,
    extra_shots: ExtraShots,
    unit_price: Price,
    line_total: BillingAmount,
    special_instructions: Option<SpecialInstructions>,
}

impl PricedOrderLine {
    /// Creates a new `PricedOrderLine`
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        menu_item_id: MenuItemId,
        name: String50,
        quantity: OrderQuantity,
        size: Option<DrinkSize>,
        milk_type: Option<MilkType>,
        extra_shots: ExtraShots,
        unit_price: Price,
        line_total: BillingAmount,
        special_instructions: Option<SpecialInstructions>,
    ) -> Self {
        Self {
            menu_item_id,
            name,
            quantity,
            size,
            milk_type,
            extra_shots,
            unit_price,
            line_total,
            special_instructions,
        }
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

    /// Returns the selected size, if any
    #[must_use]
    pub const fn size(&self) -> Option<DrinkSize> {
        self.size
    }

    /// Returns the selected milk type, if any
    #[must_use]
    pub const fn milk_type(&self) -> Option<MilkType> {
        self.milk_type
    }

    /// Returns the extra shot count
    #[must_use]
    pub const fn extra_shots(&self) -> ExtraShots {
        self.extra_shots
    }

    /// Returns the computed unit price
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the computed line total
    #[must_use]
    pub const fn line_total(&self) -> BillingAmount {
        self.line_total
    }

    /// Returns the line instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }
}

// =============================================================================
// PricedOrder
// =============================================================================

/// A fully priced order, ready to be persisted
///
/// Invariants: `tax_amount = subtotal × TAX_RATE` and
/// `total_amount = subtotal + tax_amount`, both established by
/// [`price_order`](crate::workflow::pricing::price_order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrder {
    customer: CustomerInfo,
    payment_method: PaymentMethod,
    special_instructions: Option<SpecialInstructions>,
    lines: Vec<PricedOrderLine>,
    subtotal: BillingAmount,
    tax_amount: BillingAmount,
    total_amount: BillingAmount,
}

impl PricedOrder {
    /// Creates a new `PricedOrder`
    #[must_use]
    pub const fn new(
        customer: CustomerInfo,
        payment_method: PaymentMethod,
        special_instructions: Option<SpecialInstructions>,
        lines: Vec<PricedOrderLine>,
        subtotal: BillingAmount,
        tax_amount: BillingAmount,
        total_amount: BillingAmount,
    ) -> Self {
        Self {
            customer,
            payment_method,
            special_instructions,
            lines,
            subtotal,
            tax_amount,
            total_amount,
        }
    }

    /// Returns the customer information
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Returns the payment method
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the order-level instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }

    /// Returns the priced lines
    #[must_use]
    pub fn lines(&self) -> &[PricedOrderLine] {
        &self.lines
    }

    /// Returns the sum of all line totals
    #[must_use]
    pub const fn subtotal(&self) -> BillingAmount {
        self.subtotal
    }

    /// Returns the tax on the subtotal
    #[must_use]
    pub const fn tax_amount(&self) -> BillingAmount {
        self.tax_amount
    }

    /// Returns `subtotal + tax_amount`
    #[must_use]
    pub const fn total_amount(&self) -> BillingAmount {
        self.total_amount
    }
}
