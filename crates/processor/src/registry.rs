//! In-memory order registry.

use std::collections::HashMap;

use domain::{Order, OrderId};

/// In-memory mapping from order identifier to current order state.
///
/// Orders are created lazily by the first Created event and never removed;
/// an order lives for the process lifetime. Insertion is last-write-wins:
/// a duplicate Created overwrites the prior entry without complaint.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, Order>,
}

impl OrderRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an order keyed by its id, replacing any existing entry.
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.order_id.clone(), order);
    }

    /// Gets an order by id.
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Gets a mutable order by id.
    pub fn get_mut(&mut self, order_id: &OrderId) -> Option<&mut Order> {
        self.orders.get_mut(order_id)
    }

    /// Returns true if an order with this id exists.
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Returns the number of registered orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no orders have been registered.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates over all registered orders, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }
}
