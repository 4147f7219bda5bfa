//! Tracker entry point.

use processor::{AlertObserver, ConsoleLogger, EventProcessor};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Config, process_file};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();
    let mut processor = EventProcessor::new(vec![
        Box::new(ConsoleLogger::new()),
        Box::new(AlertObserver::new()),
    ]);

    tracing::info!(path = %config.input_path.display(), "processing event records");

    match process_file(&config.input_path, &mut processor) {
        Ok(summary) => {
            tracing::info!(
                lines_read = summary.lines_read,
                events_processed = summary.events_processed,
                lines_skipped = summary.lines_skipped,
                orders = processor.registry().len(),
                "run complete"
            );
        }
        Err(err) => {
            tracing::error!(%err, "failed to process input file");
            std::process::exit(1);
        }
    }
}
