//! Single-pass tokenizer over one record line.

use crate::error::{ParseError, Result};

/// Key/value pairs extracted from one record line.
///
/// The scanner walks the line once. A key is any quoted token followed by
/// `:`; its value is either quoted text (no escape support) or raw text up
/// to the next `,`, `}` or `]`, trimmed. Structural characters outside
/// tokens (`{`, `[`, commas) are skipped, so keys inside a one-level nested
/// object are scanned like top-level keys.
#[derive(Debug)]
pub struct Fields<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Fields<'a> {
    /// Tokenizes a line into key/value pairs.
    pub fn scan(line: &'a str) -> Result<Self> {
        let bytes = line.as_bytes();
        let mut pairs = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'"' {
                i += 1;
                continue;
            }

            let key_start = i + 1;
            let key_end =
                find_quote(bytes, key_start).ok_or(ParseError::UnterminatedQuote { position: i })?;
            let key = &line[key_start..key_end];
            i = key_end + 1;

            i = skip_whitespace(bytes, i);
            if i >= bytes.len() || bytes[i] != b':' {
                return Err(ParseError::MissingSeparator {
                    key: key.to_string(),
                });
            }
            i = skip_whitespace(bytes, i + 1);

            if i < bytes.len() && bytes[i] == b'"' {
                let value_start = i + 1;
                let value_end = find_quote(bytes, value_start)
                    .ok_or(ParseError::UnterminatedQuote { position: i })?;
                pairs.push((key, &line[value_start..value_end]));
                i = value_end + 1;
            } else {
                let value_start = i;
                while i < bytes.len() && !matches!(bytes[i], b',' | b'}' | b']') {
                    i += 1;
                }
                pairs.push((key, line[value_start..i].trim()));
            }
        }

        Ok(Self { pairs })
    }

    /// Returns the first value recorded for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    /// Returns the number of extracted pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs were extracted.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn find_quote(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == b'"').map(|p| from + p)
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}
