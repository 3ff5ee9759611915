//! Logging configuration using tracing
//!
//! Stdout is reserved for headless NDJSON output, so all diagnostics go to a
//! daily rolling file instead.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "PICKER_LOG";

/// Filter used when `PICKER_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "asset_picker=info,picker_app=info,warn";

const LOG_FILE_PREFIX: &str = "asset-picker.log";

/// Initialize the logging subsystem in the default log directory
///
/// Logs are written to `~/.local/share/asset-picker/logs/`.
///
/// # Examples
/// ```bash
/// PICKER_LOG=debug asset-picker --items items.json
/// PICKER_LOG=picker_app=trace asset-picker --items items.json
/// ```
pub fn init() -> Result<()> {
    init_in(&log_directory())
}

/// Initialize logging into an explicit directory (created if missing)
pub fn init_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Asset picker starting, logging to {}", log_dir.display());
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Default log directory under the platform's local data dir
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("asset-picker")
        .join("logs")
}
