//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the rendered report.

use thiserror::Error;
use tracing_subscriber::{
    filter::{EnvFilter, ParseError},
    fmt,
    prelude::*,
    util::TryInitError,
};

use crate::config::LoggingConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    InitFailed(#[from] TryInitError),
}

/// Builds the level filter from the configured directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(&config.level)?)
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns `TelemetryError` if the filter directive does not parse or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}
