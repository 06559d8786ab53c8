//! Validated types
//!
//! Produced by [`validation`](crate::workflow::validation). Every field
//! has passed its smart constructor and every line references an
//! existing, available menu item within its extra-shot limit.

use crate::catalog::MenuItem;
use crate::compound_types::CustomerInfo;
use crate::simple_types::{
    DrinkSize, ExtraShots, MilkType, OrderQuantity, PaymentMethod, SpecialInstructions,
};

// =============================================================================
// ValidatedOrderLine
// =============================================================================

/// One validated cart line
///
/// Carries a snapshot of the resolved [`MenuItem`] so that pricing does
/// not need to consult the catalog again for base price or option flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrderLine {
    menu_item: MenuItem,
    quantity: OrderQuantity,
    size: Option<DrinkSize>,
    milk_type: Option<MilkType>,
    extra_shots: ExtraShots,
    special_instructions: Option<SpecialInstructions>,
}

impl ValidatedOrderLine {
    /// Creates a new `ValidatedOrderLine`
    #[must_use]
    pub const fn new(
        menu_item: MenuItem,
        quantity: OrderQuantity,
        size: Option<DrinkSize>,
        milk_type: Option<MilkType>,
        extra_shots: ExtraShots,
        special_instructions: Option<SpecialInstructions>,
    ) -> Self {
        Self {
            menu_item,
            quantity,
            size,
            milk_type,
            extra_shots,
            special_instructions,
        }
    }

    /// Returns the resolved menu item snapshot
    #[must_use]
    pub const fn menu_item(&self) -> &MenuItem {
        &self.menu_item
    }

    /// Returns the validated quantity
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

    /// Returns the validated extra shot count
    #[must_use]
    pub const fn extra_shots(&self) -> ExtraShots {
        self.extra_shots
    }

    /// Returns the line instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }
}

// =============================================================================
// ValidatedOrder
// =============================================================================

/// A fully validated order, ready for pricing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrder {
    customer: CustomerInfo,
    payment_method: PaymentMethod,
    special_instructions: Option<SpecialInstructions>,
    lines: Vec<ValidatedOrderLine>,
}

impl ValidatedOrder {
    /// Creates a new `ValidatedOrder`
    #[must_use]
    pub const fn new(
        customer: CustomerInfo,
        payment_method: PaymentMethod,
        special_instructions: Option<SpecialInstructions>,
        lines: Vec<ValidatedOrderLine>,
    ) -> Self {
        Self {
            customer,
            payment_method,
            special_instructions,
            lines,
        }
    }

    /// Returns the validated customer information
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Returns the validated payment method
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the order-level instructions, if any
    #[must_use]
    pub const fn special_instructions(&self) -> Option<&SpecialInstructions> {
        self.special_instructions.as_ref()
    }

    /// Returns the validated lines
    #[must_use]
    pub fn lines(&self) -> &[ValidatedOrderLine] {
        &self.lines
    }
}
