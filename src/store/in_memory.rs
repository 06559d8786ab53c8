//! In-memory order store
//!
//! Used by tests and the demo server. Keyed by order number, so the
//! uniqueness check and the write happen under one lock acquisition,
//! which gives the same all-or-nothing behavior a relational
//! implementation gets from a transaction.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::simple_types::{OrderNumber, OrderStatus};
use crate::workflow::PlacedOrder;

use super::order_store::{OrderStore, PersistenceError, StatusUpdateError};

// =============================================================================
// InMemoryOrderStore
// =============================================================================

/// Mutex-guarded in-memory implementation of [`OrderStore`]
///
/// # Examples
///
/// ```
/// use cafe_ordering::store::{InMemoryOrderStore, OrderStore};
///
/// let store = InMemoryOrderStore::new();
/// assert_eq!(store.count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<String, PlacedOrder>>,
}

impl InMemoryOrderStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of persisted orders
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn count(&self) -> usize {
        self.orders.lock().expect("order store lock poisoned").len()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: &PlacedOrder) -> Result<(), PersistenceError> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| PersistenceError::storage("order store lock poisoned"))?;

        let key = order.order_number().value().to_string();

        if orders.contains_key(&key) {
            return Err(PersistenceError::duplicate_order_number(&key));
        }

        orders.insert(key, order.clone());

        Ok(())
    }

    fn find_by_order_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<PlacedOrder>, PersistenceError> {
        let orders = self
            .orders
            .lock()
            .map_err(|_| PersistenceError::storage("order store lock poisoned"))?;

        Ok(orders.get(order_number.value()).cloned())
    }

    fn update_status(
        &self,
        order_number: &OrderNumber,
        next: OrderStatus,
    ) -> Result<PlacedOrder, StatusUpdateError> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| PersistenceError::storage("order store lock poisoned"))?;

        let order = orders
            .get(order_number.value())
            .ok_or_else(|| StatusUpdateError::not_found(order_number))?;

        if !order.status().can_transition_to(next) {
            return Err(StatusUpdateError::invalid_transition(order.status(), next));
        }

        let updated = order.with_status(next, Utc::now());
        orders.insert(order_number.value().to_string(), updated.clone());

        Ok(updated)
    }
}
