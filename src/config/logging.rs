//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_module_directives_are_valid() {
        let config = LoggingConfig {
            filter: "warn,legal_query_gate=debug".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_garbage_filter_rejected() {
        let config = LoggingConfig {
            filter: "legal_query_gate=notalevel".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
