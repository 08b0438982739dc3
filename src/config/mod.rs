//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEGAL_QUERY_GATE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use legal_query_gate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Replies arrive after {:?}", config.session.reply_delay());
//! ```

mod error;
mod logging;
mod session;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use session::{SessionConfig, MAX_DELAY_MS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with an empty environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chat session timing and gating
    #[serde(default)]
    pub session: SessionConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEGAL_QUERY_GATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LEGAL_QUERY_GATE__SESSION__REPLY_DELAY_MS=800` -> `session.reply_delay_ms = 800`
    /// - `LEGAL_QUERY_GATE__LOGGING__FORMAT=json` -> `logging.format = json`
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
                    .prefix("LEGAL_QUERY_GATE")
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
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
