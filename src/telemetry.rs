use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Settings;
use crate::error::Result;

/// Send tracing output to the configured log file.
///
/// The terminal belongs to the TUI, so nothing is written to stdout.
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
