//! Application configuration loaded from the environment

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors while reading application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "HAWKEYE_LOG_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name
    pub app_name: String,
    /// Environment (development, production, ...)
    pub environment: String,
    /// Label language code for reports (`HAWKEYE_LANG`), parsed by the binary
    pub language: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "hawkeye".to_string(),
            environment: "development".to_string(),
            language: "vi".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read `HAWKEYE_ENV`, `HAWKEYE_LANG` and `HAWKEYE_LOG_FORMAT`, keeping
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(env) = lookup("HAWKEYE_ENV").filter(|v| !v.trim().is_empty()) {
            config.environment = env;
        }
        if let Some(lang) = lookup("HAWKEYE_LANG").filter(|v| !v.trim().is_empty()) {
            config.language = lang.trim().to_string();
        }
        if let Some(format) = lookup("HAWKEYE_LOG_FORMAT") {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, "vi");
        assert!(!config.is_production());
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HAWKEYE_ENV", "production"),
            ("HAWKEYE_LANG", "en"),
            ("HAWKEYE_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.language, "en");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let err = AppConfig::from_lookup(lookup(&[("HAWKEYE_LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HAWKEYE_LOG_FORMAT: xml");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
