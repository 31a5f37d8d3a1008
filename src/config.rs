// Copyright 2025 Cowboy AI, LLC.

//! Demo configuration
//!
//! Only presentation and diagnostics are configurable. Validation and bonus
//! rules belong to the domain types and are never read from configuration.

use crate::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "REFACTOR_KATA_CONFIG";

/// Top-level configuration shared by the demo binaries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KataConfig {
    /// Diagnostics settings
    pub logging: LoggingConfig,
    /// Report rendering settings
    pub report: ReportConfig,
}

/// Diagnostics settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Report rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportConfig {
    /// `chrono` format string for the report generation date
    pub date_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl KataConfig {
    /// Parse configuration from a JSON document; missing keys take defaults
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::Configuration(format!("invalid configuration: {e}")))
    }

    /// Read configuration from a JSON file
    ///
    /// An unreadable file is [`DomainError::Io`]; unparsable content is
    /// [`DomainError::Configuration`].
    pub fn from_path(path: impl AsRef<Path>) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or fall back to defaults
    pub fn load() -> DomainResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => Ok(Self::default()),
        }
    }

    /// JSON Schema describing the configuration file
    pub fn json_schema() -> DomainResult<serde_json::Value> {
        let schema = schemars::schema_for!(KataConfig);
        Ok(serde_json::to_value(schema)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = KataConfig::default();
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.report.date_format, "%d/%m/%Y");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = KataConfig::from_json_str(r#"{"report":{"date_format":"%Y-%m-%d"}}"#).unwrap();
        assert_eq!(config.report.date_format, "%Y-%m-%d");
        assert_eq!(config.logging, LoggingConfig::default());

        let empty = KataConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, KataConfig::default());
    }

    #[test]
    fn malformed_json_is_configuration_error() {
        let err = KataConfig::from_json_str(r#"{"logging": 3}"#).unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = KataConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = KataConfig::json_schema().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("logging"));
        assert!(properties.contains_key("report"));
    }
}
