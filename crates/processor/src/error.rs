//! Observer error types.

use thiserror::Error;

/// Errors an observer can raise while handling a notification.
///
/// Observer failures never abort dispatch; the processor logs them and
/// continues with the remaining observers.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// Writing console output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An observer-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Result type for observer notifications.
pub type Result<T> = std::result::Result<T, ObserverError>;
