//! Driver for the order lifecycle tracker.
//!
//! Reads a file of event records line by line, parses each line into at
//! most one event, and feeds events to the dispatcher strictly in file
//! order. The file is streamed once, top to bottom.

pub mod config;
pub mod driver;

pub use config::Config;
pub use driver::{DriverError, RunSummary, process_file, process_lines};
