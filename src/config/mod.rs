//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRADEOFF_ENGINE` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use tradeoff_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing {} reports", config.output.format);
//! ```

mod analysis;
mod error;
mod logging;
mod output;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, MAX_PRECISION};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Which analyses run and how missing directions are filled
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log filter and line format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report format and numeric precision
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRADEOFF_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRADEOFF_ENGINE__ANALYSIS__DEFAULT_DIRECTION=maximize` -> `analysis.default_direction`
    /// - `TRADEOFF_ENGINE__OUTPUT__FORMAT=markdown` -> `output.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRADEOFF_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }
}
