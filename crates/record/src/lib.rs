//! Line-oriented record parsing for order lifecycle events.
//!
//! Each input record is one line of single-level `"key": value` /
//! `"key": "value"` text (quasi-JSON, never validated as JSON). The scanner
//! tokenizes a line once into key/value pairs; [`parse_record`] then builds
//! at most one typed [`domain::Event`] from the recognized fields.
//!
//! Lines with a missing or unrecognized `eventType` are skipped with a
//! diagnostic. Malformed fields fail the whole line with a [`ParseError`].

pub mod error;
pub mod event;
pub mod scanner;

pub use error::{ParseError, Result};
pub use event::parse_record;
pub use scanner::Fields;
