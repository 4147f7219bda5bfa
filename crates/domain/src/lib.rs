//! Domain model for the order lifecycle tracker.
//!
//! This crate provides the core domain types:
//! - Identifier newtypes and the `Money` value object
//! - `OrderStatus` lifecycle enum
//! - `Event` records with a tagged payload over the four event kinds
//! - The `Order` entity with its append-only event history

pub mod events;
pub mod order;
pub mod status;
pub mod value_objects;

pub use events::{
    Event, EventKind, EventPayload, OrderCancelledData, OrderCreatedData, PaymentReceivedData,
    ShippingScheduledData,
};
pub use order::Order;
pub use status::OrderStatus;
pub use value_objects::{CustomerId, EventId, Item, ItemId, Money, OrderId, ParseMoneyError};
