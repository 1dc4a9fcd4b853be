//! Application Configuration
//!
//! Values are baked in at build time from environment variables
//! (`TASKBOARD_API_URL=https://api.example.com trunk build`), with defaults
//! suited to a local backend.

use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5050";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// Rows per task page
    pub page_size: u32,
    /// Quiet period before search text becomes a filter
    pub search_debounce_ms: u32,
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Configuration captured at compile time.
    ///
    /// Runs before the logger exists, so errors are returned rather than logged.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match name {
            "TASKBOARD_API_URL" => option_env!("TASKBOARD_API_URL"),
            "TASKBOARD_PAGE_SIZE" => option_env!("TASKBOARD_PAGE_SIZE"),
            "TASKBOARD_SEARCH_DEBOUNCE_MS" => option_env!("TASKBOARD_SEARCH_DEBOUNCE_MS"),
            "TASKBOARD_LOG" => option_env!("TASKBOARD_LOG"),
            _ => None,
        })
    }

    /// Level to install the logger with, even when the configuration is invalid.
    pub fn log_level_of(config: &Result<Self, ConfigError>) -> LevelFilter {
        config.as_ref().map_or(DEFAULT_LOG_LEVEL, |c| c.log_level)
    }

    /// Once logging is up: report an invalid configuration and fall back to defaults.
    pub fn or_defaults(config: Result<Self, ConfigError>) -> Self {
        config.unwrap_or_else(|e| {
            log::error!("invalid build configuration, using defaults: {}", e);
            Self::default()
        })
    }

    /// Build from any variable source.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = match lookup("TASKBOARD_API_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::Empty { name: "TASKBOARD_API_URL" }),
            Some(url) => url.trim().trim_end_matches('/').to_string(),
            None => defaults.api_base_url,
        };
        let page_size = parse_positive(&lookup, "TASKBOARD_PAGE_SIZE")?.unwrap_or(defaults.page_size);
        let search_debounce_ms =
            parse_positive(&lookup, "TASKBOARD_SEARCH_DEBOUNCE_MS")?.unwrap_or(defaults.search_debounce_ms);
        let log_level = lookup("TASKBOARD_LOG")
            .map(|name| console_logger::parse_level(name, defaults.log_level))
            .unwrap_or(defaults.log_level);

        Ok(Self {
            api_base_url,
            page_size,
            search_debounce_ms,
            log_level,
        })
    }
}

fn parse_positive<'a>(
    lookup: &impl Fn(&str) -> Option<&'a str>,
    name: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(ConfigError::InvalidNumber { name, value: raw.to_string() }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &'static str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, &'static str> = vars.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        AppConfig::from_lookup(|name| map.get(name).copied())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TASKBOARD_API_URL", "https://api.example.com/"),
            ("TASKBOARD_PAGE_SIZE", "25"),
            ("TASKBOARD_SEARCH_DEBOUNCE_MS", "150"),
            ("TASKBOARD_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert_eq!(
            config_from(&[("TASKBOARD_PAGE_SIZE", "0")]),
            Err(ConfigError::InvalidNumber { name: "TASKBOARD_PAGE_SIZE", value: "0".into() })
        );
        assert!(config_from(&[("TASKBOARD_SEARCH_DEBOUNCE_MS", "soon")]).is_err());
        assert_eq!(
            config_from(&[("TASKBOARD_API_URL", "  ")]),
            Err(ConfigError::Empty { name: "TASKBOARD_API_URL" })
        );
    }

    #[test]
    fn test_invalid_config_still_yields_log_level_and_defaults() {
        let invalid = config_from(&[("TASKBOARD_PAGE_SIZE", "lots"), ("TASKBOARD_LOG", "trace")]);
        assert!(invalid.is_err());
        assert_eq!(AppConfig::log_level_of(&invalid), DEFAULT_LOG_LEVEL);
        assert_eq!(AppConfig::or_defaults(invalid), AppConfig::default());

        let valid = config_from(&[("TASKBOARD_LOG", "trace")]);
        assert_eq!(AppConfig::log_level_of(&valid), LevelFilter::Trace);
        assert_eq!(AppConfig::or_defaults(valid).log_level, LevelFilter::Trace);
    }
}
