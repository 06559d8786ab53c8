//! Unvalidated input types
//!
//! Raw order input as it arrives from the outside world. No field has
//! been checked yet; validation happens in
//! [`validation`](crate::workflow::validation).

// =============================================================================
// UnvalidatedOrderLine
// =============================================================================

/// One raw cart line selection
///
/// Optional customizations arrive as empty strings (`size`, `milk_type`,
/// `special_instructions`) or zero (`extra_shots`).
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::UnvalidatedOrderLine;
///
/// let line = UnvalidatedOrderLine::new(
///     "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10".to_string(),
///     2,
///     "large".to_string(),
///     "oat".to_string(),
///     1,
///     String::new(),
/// );
/// assert_eq!(line.quantity(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrderLine {
    menu_item_id: String,
    quantity: u32,
    size: String,
    milk_type: String,
    extra_shots: u32,
    special_instructions: String,
}

impl UnvalidatedOrderLine {
    /// Creates a new `UnvalidatedOrderLine`
    #[must_use]
    pub const fn new(
        menu_item_id: String,
        quantity: u32,
        size: String,
        milk_type: String,
        extra_shots: u32,
        special_instructions: String,
    ) -> Self {
        Self {
            menu_item_id,
            quantity,
            size,
            milk_type,
            extra_shots,
            special_instructions,
        }
    }

    /// Returns the raw menu item id string
    #[must_use]
    pub fn menu_item_id(&self) -> &str {
        &self.menu_item_id
    }

    /// Returns the requested quantity
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the raw size string (empty when not selected)
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the raw milk type string (empty when not selected)
    #[must_use]
    pub fn milk_type(&self) -> &str {
        &self.milk_type
    }

    /// Returns the requested extra shot count
    #[must_use]
    pub const fn extra_shots(&self) -> u32 {
        self.extra_shots
    }

    /// Returns the raw line instructions (empty when not provided)
    #[must_use]
    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }
}

// =============================================================================
// UnvalidatedOrder
// =============================================================================

/// A raw order as submitted by a customer
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::{UnvalidatedOrder, UnvalidatedOrderLine};
///
/// let order = UnvalidatedOrder::new(
///     "Aiko".to_string(),
///     String::new(),
///     String::new(),
///     "cash".to_string(),
///     vec![UnvalidatedOrderLine::new(
///         "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10".to_string(),
///         1,
///         String::new(),
///         String::new(),
///         0,
///         String::new(),
///     )],
/// );
/// assert_eq!(order.lines().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    customer_name: String,
    customer_phone: String,
    special_instructions: String,
    payment_method: String,
    lines: Vec<UnvalidatedOrderLine>,
}

impl UnvalidatedOrder {
    /// Creates a new `UnvalidatedOrder`
    #[must_use]
    pub const fn new(
        customer_name: String,
        customer_phone: String,
        special_instructions: String,
        payment_method: String,
        lines: Vec<UnvalidatedOrderLine>,
    ) -> Self {
        Self {
            customer_name,
            customer_phone,
            special_instructions,
            payment_method,
            lines,
        }
    }

    /// Returns the raw customer name (empty when anonymous)
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the raw customer phone (empty when not provided)
    #[must_use]
    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    /// Returns the raw order-level instructions (empty when not provided)
    #[must_use]
    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }

    /// Returns the raw payment method string
    #[must_use]
    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    /// Returns the raw cart lines
    #[must_use]
    pub fn lines(&self) -> &[UnvalidatedOrderLine] {
        &self.lines
    }
}
