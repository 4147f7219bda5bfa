//! Console logging observer.

use std::io::Write;

use domain::{Event, Order};

use crate::Result;
use crate::observer::Observer;

/// Prints one line to standard output for every processed event.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    /// Creates the logger.
    pub fn new() -> Self {
        Self
    }

    /// Formats the console line for one processed event.
    pub fn format_line(order: &Order, event: &Event) -> String {
        format!(
            "[Logger] Event processed: {} for Order {} | Current Status: {}",
            event.kind(),
            order.order_id,
            order.status
        )
    }
}

impl Observer for ConsoleLogger {
    fn name(&self) -> &'static str {
        "ConsoleLogger"
    }

    fn notify(&self, order: &Order, event: &Event) -> Result<()> {
        writeln!(std::io::stdout(), "{}", Self::format_line(order, event))?;
        Ok(())
    }
}
