//! Observer trait for post-transition side effects.

use domain::{Event, Order};

use crate::Result;

/// A side-effect handler invoked synchronously after every successfully
/// applied event, in registration order.
///
/// Observers receive the order after the transition has been committed;
/// the event reference is the history entry that was just appended. A
/// failing observer is isolated: its error is logged and the remaining
/// observers still run.
pub trait Observer {
    /// Returns the name of this observer, used in failure diagnostics.
    fn name(&self) -> &'static str;

    /// Handles one applied event.
    fn notify(&self, order: &Order, event: &Event) -> Result<()>;
}
