//! Driver configuration.

use std::path::PathBuf;

/// Default input file processed when the tracker starts.
pub const DEFAULT_INPUT_FILE: &str = "events.txt";

/// Driver configuration.
///
/// The tracker takes no command-line flags and no behavioral environment
/// variables; it processes a fixed default input path and exits. Only the
/// standard `RUST_LOG` filter is honored, by the tracing subscriber.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the input record file.
    pub input_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_path() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("events.txt"));
    }
}
