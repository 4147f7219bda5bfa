//! File driver: streams records into the dispatcher.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use processor::EventProcessor;
use record::parse_record;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The input file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counters for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input.
    pub lines_read: usize,

    /// Events parsed and fed to the dispatcher.
    pub events_processed: usize,

    /// Lines skipped: blank, unrecognized kind, or malformed.
    pub lines_skipped: usize,
}

/// Streams records from `reader` into the processor, strictly in order.
///
/// Each line yields at most one event, fed to the dispatcher immediately.
/// A line that fails to parse is skipped with a diagnostic and the run
/// continues; only an I/O failure while reading aborts it.
pub fn process_lines<R: BufRead>(
    reader: R,
    processor: &mut EventProcessor,
) -> Result<RunSummary, DriverError> {
    let mut summary = RunSummary::default();

    for line in reader.lines() {
        let line = line?;
        summary.lines_read += 1;

        if line.trim().is_empty() {
            summary.lines_skipped += 1;
            continue;
        }

        match parse_record(&line) {
            Ok(Some(event)) => {
                processor.process_event(event);
                summary.events_processed += 1;
            }
            Ok(None) => {
                summary.lines_skipped += 1;
            }
            Err(err) => {
                tracing::warn!(
                    line_number = summary.lines_read,
                    %err,
                    "skipping malformed record"
                );
                summary.lines_skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Opens `path` and processes every record in it.
///
/// A missing or unreadable file is a startup failure; no partial
/// processing happens.
pub fn process_file(
    path: impl AsRef<Path>,
    processor: &mut EventProcessor,
) -> Result<RunSummary, DriverError> {
    let file = File::open(path)?;
    process_lines(BufReader::new(file), processor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn empty_processor() -> EventProcessor {
        EventProcessor::new(Vec::new())
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n   \n";
        let mut processor = empty_processor();
        let summary = process_lines(Cursor::new(input), &mut processor).unwrap();

        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.events_processed, 0);
        assert_eq!(summary.lines_skipped, 2);
    }

    #[test]
    fn test_malformed_line_does_not_stop_the_run() {
        let input = concat!(
            r#"{"eventType":"OrderCreated","eventId":"e1","orderId":"o1","customerId":"c1","totalAmount":oops}"#,
            "\n",
            r#"{"eventType":"OrderCreated","eventId":"e2","orderId":"o2","customerId":"c2","totalAmount":50}"#,
            "\n",
        );
        let mut processor = empty_processor();
        let summary = process_lines(Cursor::new(input), &mut processor).unwrap();

        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.events_processed, 1);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(processor.registry().len(), 1);
    }

    #[test]
    fn test_unsupported_kind_counts_as_skipped() {
        let input = r#"{"eventType":"OrderShipped","eventId":"e1","orderId":"o1"}"#;
        let mut processor = empty_processor();
        let summary = process_lines(Cursor::new(input), &mut processor).unwrap();

        assert_eq!(summary.lines_read, 1);
        assert_eq!(summary.events_processed, 0);
        assert_eq!(summary.lines_skipped, 1);
        assert!(processor.registry().is_empty());
    }

    #[test]
    fn test_missing_file_is_a_startup_failure() {
        let mut processor = empty_processor();
        let result = process_file("does-not-exist.txt", &mut processor);
        assert!(matches!(result, Err(DriverError::Io(_))));
    }
}
