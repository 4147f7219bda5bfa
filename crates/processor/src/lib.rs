//! Order registry, event dispatch and observers.
//!
//! This crate holds the tracker core:
//! - [`OrderRegistry`] — the in-memory mapping from order id to order state
//! - [`EventProcessor`] — routes each event through the state-transition
//!   logic and then to the registered observers
//! - [`Observer`] trait plus the two built-in observers,
//!   [`ConsoleLogger`] and [`AlertObserver`]

pub mod error;
pub mod observer;
pub mod observers;
pub mod processor;
pub mod registry;

pub use error::{ObserverError, Result};
pub use observer::Observer;
pub use observers::{AlertObserver, ConsoleLogger};
pub use processor::EventProcessor;
pub use registry::OrderRegistry;
