//! Order store trait and error definitions

use thiserror::Error;

use crate::simple_types::{OrderNumber, OrderStatus};
use crate::workflow::PlacedOrder;

// =============================================================================
// PersistenceError
// =============================================================================

/// Errors raised by order persistence
///
/// `DuplicateOrderNumber` is the uniqueness safety net: order numbers are
/// generated collision-resistantly, but a store implementation must still
/// detect a clash and fail cleanly rather than overwrite. Every other
/// storage failure is carried opaquely in `Storage`.
///
/// # Examples
///
/// ```
/// use cafe_ordering::store::PersistenceError;
///
/// let error = PersistenceError::duplicate_order_number("ORD-20260101000000-AAAAAA");
/// assert!(error.is_duplicate_order_number());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Another order already holds this order number
    #[error("Duplicate order number: {order_number}")]
    DuplicateOrderNumber {
        /// The clashing order number
        order_number: String,
    },

    /// Any other storage failure
    #[error("Storage error: {message}")]
    Storage {
        /// Implementation-specific detail; not shown to end users
        message: String,
    },
}

impl PersistenceError {
    /// Creates a `DuplicateOrderNumber` error
    ///
    /// # Arguments
    ///
    /// * `order_number` - The clashing order number
    #[must_use]
    pub fn duplicate_order_number(order_number: &str) -> Self {
        Self::DuplicateOrderNumber {
            order_number: order_number.to_string(),
        }
    }

    /// Creates an opaque `Storage` error
    ///
    /// # Arguments
    ///
    /// * `message` - Implementation-specific detail
    #[must_use]
    pub fn storage(message: &str) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }

    /// Returns `true` for the uniqueness-violation variant
    #[must_use]
    pub fn is_duplicate_order_number(&self) -> bool {
        matches!(self, Self::DuplicateOrderNumber { .. })
    }
}

// =============================================================================
// StatusUpdateError
// =============================================================================

/// Errors raised by the status-update operation
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StatusUpdateError {
    /// No order exists with the given order number
    #[error("Order not found: {order_number}")]
    NotFound {
        /// The unknown order number
        order_number: String,
    },

    /// The requested transition is not allowed by the lifecycle
    #[error("Illegal status transition: {} -> {}", .from.value(), .to.value())]
    InvalidTransition {
        /// Current status
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },

    /// The underlying storage failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StatusUpdateError {
    /// Creates a `NotFound` error
    ///
    /// # Arguments
    ///
    /// * `order_number` - The unknown order number
    #[must_use]
    pub fn not_found(order_number: &OrderNumber) -> Self {
        Self::NotFound {
            order_number: order_number.value().to_string(),
        }
    }

    /// Creates an `InvalidTransition` error
    ///
    /// # Arguments
    ///
    /// * `from` - Current status
    /// * `to` - Requested status
    #[must_use]
    pub const fn invalid_transition(from: OrderStatus, to: OrderStatus) -> Self {
        Self::InvalidTransition { from, to }
    }
}

// =============================================================================
// OrderStore
// =============================================================================

/// Trait for order store implementations
///
/// Implementations must be thread-safe (`Send + Sync`) and must make
/// `insert` atomic: either the order row and all of its item rows are
/// written, or nothing is. A relational implementation achieves this
/// with a transaction; the in-memory implementation holds one lock for
/// the whole operation.
///
/// # Operations
///
/// - `insert`: Persist a new order with its items, enforcing order-number
///   uniqueness
/// - `find_by_order_number`: Look up a persisted order
/// - `update_status`: Apply a lifecycle transition
pub trait OrderStore: Send + Sync {
    /// Persists a new order and its line items atomically
    ///
    /// # Arguments
    ///
    /// * `order` - The order to persist
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::DuplicateOrderNumber`] when the order number
    ///   is already taken
    /// - [`PersistenceError::Storage`] for any other storage failure
    fn insert(&self, order: &PlacedOrder) -> Result<(), PersistenceError>;

    /// Looks up an order by its customer-facing order number
    ///
    /// # Arguments
    ///
    /// * `order_number` - The order number to look up
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the lookup itself
    /// fails; an unknown order number is `Ok(None)`.
    fn find_by_order_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<PlacedOrder>, PersistenceError>;

    /// Applies a lifecycle transition to a persisted order
    ///
    /// Validates the transition with
    /// [`OrderStatus::can_transition_to`], refreshes `updated_at`, and
    /// returns the updated order.
    ///
    /// # Arguments
    ///
    /// * `order_number` - The order to update
    /// * `next` - The requested status
    ///
    /// # Errors
    ///
    /// - [`StatusUpdateError::NotFound`] when no such order exists
    /// - [`StatusUpdateError::InvalidTransition`] when the lifecycle
    ///   forbids the transition
    /// - [`StatusUpdateError::Persistence`] when storage fails
    fn update_status(
        &self,
        order_number: &OrderNumber,
        next: OrderStatus,
    ) -> Result<PlacedOrder, StatusUpdateError>;
}

// =============================================================================
// Tests
// =============================================================================
