//! Logging setup
//!
//! Every record goes to stdout and, when the file can be opened, is appended
//! to a persistent log file as well.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "homework_bot=debug,homework_client=debug";

/// Installs the global tracing subscriber
///
/// Must be called once, before anything logs.
pub fn init(log_file: &Path) {
    let (file_layer, file_error) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_line_number(true),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_line_number(true),
        )
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!(
            "Failed to open log file {}, logging to stdout only: {}",
            log_file.display(),
            e
        );
    }
}
