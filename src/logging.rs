//! Logging setup for the bikeshare explorer
//!
//! Logs go to stderr so they never interleave with the prompts and reports on
//! stdout. The level comes from `RUST_LOG` and defaults to `warn`; set
//! `RUST_LOG=bikeshare=debug` to see prompt answers and report timings.
//!
//! When a log directory is configured, every event at the active level is also
//! written to a daily-rotating `bikeshare.<date>.log` file.
//!
//! ```no_run
//! bikeshare::logging::init(None).expect("Failed to initialize logging");
//! tracing::info!("explorer started");
//! ```

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub const DEFAULT_FILTER: &str = "warn";

/// Builds the env filter, falling back to [`DEFAULT_FILTER`] when `RUST_LOG`
/// is unset or invalid.
pub fn env_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")
}

/// Initializes the global subscriber.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the file appender fails
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(10)
                .filename_prefix("bikeshare")
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create log file appender")?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(?log_dir, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(env_filter().is_ok());
    }
}
