//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Later events overwrite the status unconditionally; there is no
/// transition guard, so cancelling an already-shipped order is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been created, no payment recorded yet.
    #[default]
    Pending,

    /// Payment covering the full total has been received.
    Paid,

    /// A payment below the order total has been received.
    PartiallyPaid,

    /// Shipping has been scheduled.
    Shipped,

    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::PartiallyPaid => "PartiallyPaid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
