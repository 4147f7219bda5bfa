//! Built-in observers.

pub mod alert;
pub mod logger;

pub use alert::AlertObserver;
pub use logger::ConsoleLogger;
