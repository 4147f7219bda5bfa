//! Order lifecycle events.

use serde::{Deserialize, Serialize};

use crate::{CustomerId, EventId, Item, Money, OrderId};

/// The four recognized event kinds, named after their wire-format tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A new order was created.
    OrderCreated,

    /// A payment was received for an order.
    PaymentReceived,

    /// Shipping was scheduled for an order.
    ShippingScheduled,

    /// An order was cancelled.
    OrderCancelled,
}

impl EventKind {
    /// Returns the kind as its wire-format tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::OrderCreated => "OrderCreated",
            EventKind::PaymentReceived => "PaymentReceived",
            EventKind::ShippingScheduled => "ShippingScheduled",
            EventKind::OrderCancelled => "OrderCancelled",
        }
    }

    /// Maps a wire-format tag to a kind. Unrecognized tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "OrderCreated" => Some(EventKind::OrderCreated),
            "PaymentReceived" => Some(EventKind::PaymentReceived),
            "ShippingScheduled" => Some(EventKind::ShippingScheduled),
            "OrderCancelled" => Some(EventKind::OrderCancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lifecycle occurrence for an order.
///
/// Events are immutable value records once parsed; ownership transfers to
/// the order's history when the event is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier carried by the record.
    pub event_id: EventId,

    /// Raw timestamp text from the record, kept opaque.
    pub timestamp: Option<String>,

    /// The order this event refers to.
    pub order_id: OrderId,

    /// Kind-specific payload.
    pub payload: EventPayload,
}

/// Kind-specific event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EventPayload {
    /// Order was created.
    Created(OrderCreatedData),

    /// Payment was received.
    PaymentReceived(PaymentReceivedData),

    /// Shipping was scheduled.
    ShippingScheduled(ShippingScheduledData),

    /// Order was cancelled.
    Cancelled(OrderCancelledData),
}

/// Data for a Created event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedData {
    /// The customer who placed the order.
    pub customer_id: CustomerId,

    /// Ordered items. The record format supports a single item, so this
    /// holds at most one entry.
    pub items: Vec<Item>,

    /// Order total.
    pub total_amount: Money,
}

/// Data for a PaymentReceived event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceivedData {
    /// Amount paid, compared against the order total on application.
    pub amount_paid: Money,
}

/// Data for a ShippingScheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingScheduledData {
    /// Scheduled shipping date, stored but not validated.
    pub shipping_date: String,
}

/// Data for a Cancelled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancelledData {
    /// Reason for cancellation.
    pub reason: String,
}

impl Event {
    /// Returns the kind tag of this event.
    pub fn kind(&self) -> EventKind {
        match self.payload {
            EventPayload::Created(_) => EventKind::OrderCreated,
            EventPayload::PaymentReceived(_) => EventKind::PaymentReceived,
            EventPayload::ShippingScheduled(_) => EventKind::ShippingScheduled,
            EventPayload::Cancelled(_) => EventKind::OrderCancelled,
        }
    }

    /// Creates a Created event.
    pub fn created(
        event_id: impl Into<EventId>,
        timestamp: Option<String>,
        order_id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<Item>,
        total_amount: Money,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            order_id: order_id.into(),
            payload: EventPayload::Created(OrderCreatedData {
                customer_id: customer_id.into(),
                items,
                total_amount,
            }),
        }
    }

    /// Creates a PaymentReceived event.
    pub fn payment_received(
        event_id: impl Into<EventId>,
        timestamp: Option<String>,
        order_id: impl Into<OrderId>,
        amount_paid: Money,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            order_id: order_id.into(),
            payload: EventPayload::PaymentReceived(PaymentReceivedData { amount_paid }),
        }
    }

    /// Creates a ShippingScheduled event.
    pub fn shipping_scheduled(
        event_id: impl Into<EventId>,
        timestamp: Option<String>,
        order_id: impl Into<OrderId>,
        shipping_date: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            order_id: order_id.into(),
            payload: EventPayload::ShippingScheduled(ShippingScheduledData {
                shipping_date: shipping_date.into(),
            }),
        }
    }

    /// Creates a Cancelled event.
    pub fn cancelled(
        event_id: impl Into<EventId>,
        timestamp: Option<String>,
        order_id: impl Into<OrderId>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            order_id: order_id.into(),
            payload: EventPayload::Cancelled(OrderCancelledData {
                reason: reason.into(),
            }),
        }
    }
}
