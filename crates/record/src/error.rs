//! Record parse errors.

use thiserror::Error;

/// Errors that can occur while parsing one record line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted key or value ran to the end of the line without a closing
    /// quote.
    #[error("unterminated quoted token starting at byte {position}")]
    UnterminatedQuote { position: usize },

    /// A quoted key was not followed by a `:` separator.
    #[error("missing ':' after key {key:?}")]
    MissingSeparator { key: String },

    /// A field the event kind requires was absent from the record.
    #[error("missing field {key:?}")]
    MissingField { key: &'static str },

    /// A numeric field did not parse as a number.
    #[error("invalid number in field {key:?}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Result type for record parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
