//! The order entity.

use serde::{Deserialize, Serialize};

use crate::{CustomerId, Event, Item, Money, OrderId, OrderStatus};

/// An order materialized from a Created event.
///
/// Once created an order lives in the registry for the process lifetime;
/// there is no deletion. The history holds exactly the events that were
/// successfully applied to this order, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique key of this order in the registry.
    pub order_id: OrderId,

    /// The customer who placed the order.
    pub customer_id: CustomerId,

    /// Ordered items.
    pub items: Vec<Item>,

    /// Order total, compared against received payments.
    pub total_amount: Money,

    /// Current lifecycle status.
    pub status: OrderStatus,

    /// Applied events, append-only.
    pub history: Vec<Event>,
}

impl Order {
    /// Creates a new pending order with an empty history.
    pub fn new(
        order_id: OrderId,
        customer_id: CustomerId,
        items: Vec<Item>,
        total_amount: Money,
    ) -> Self {
        Self {
            order_id,
            customer_id,
            items,
            total_amount,
            status: OrderStatus::Pending,
            history: Vec::new(),
        }
    }

    /// Overwrites the status. Later events always win; there is no
    /// transition check.
    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Appends an applied event to the history.
    pub fn record(&mut self, event: Event) {
        self.history.push(event);
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {{ order_id: {}, customer_id: {}, status: {}, total_amount: {} }}",
            self.order_id, self.customer_id, self.status, self.total_amount
        )
    }
}
