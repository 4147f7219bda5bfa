//! Alerting observer.

use std::io::Write;

use domain::{Event, EventKind, Order, OrderStatus};

use crate::Result;
use crate::observer::Observer;

/// Emits an alert line for cancellations and shipped orders.
#[derive(Debug, Default)]
pub struct AlertObserver;

impl AlertObserver {
    /// Creates the alerter.
    pub fn new() -> Self {
        Self
    }

    /// Returns true when this observer fires: the event is a cancellation,
    /// or the order's current status is Shipped.
    pub fn should_alert(order: &Order, event: &Event) -> bool {
        event.kind() == EventKind::OrderCancelled || order.status == OrderStatus::Shipped
    }

    /// Formats the alert line.
    pub fn format_line(order: &Order) -> String {
        format!(
            "[ALERT] Sending alert for Order {}: Status changed to {}",
            order.order_id, order.status
        )
    }
}

impl Observer for AlertObserver {
    fn name(&self) -> &'static str {
        "AlertObserver"
    }

    fn notify(&self, order: &Order, event: &Event) -> Result<()> {
        if Self::should_alert(order, event) {
            writeln!(std::io::stdout(), "{}", Self::format_line(order))?;
        }
        Ok(())
    }
}
