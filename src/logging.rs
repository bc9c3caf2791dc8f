//! Tracing subscriber setup

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::LogSettings;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("Failed to install tracing subscriber: {0}")]
    InstallError(String),
}

/// Installs the global `tracing` subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, so
/// embedding applications that set up their own logging can ignore the error.
pub fn init(settings: &LogSettings) -> Result<(), LoggingError> {
    let level = parse_level(&settings.level)?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(settings.thread_ids)
        .with_file(settings.file_and_line)
        .with_line_number(settings.file_and_line);

    let result = if settings.pretty {
        builder.pretty().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| LoggingError::InstallError(e.to_string()))
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    Level::from_str(level.trim()).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}
