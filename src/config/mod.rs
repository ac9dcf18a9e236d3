//! Configuration management for the pado aggregator
//!
//! This module handles loading and validating configuration from
//! environment variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Trend source configuration
    pub trends: TrendsConfig,

    /// Repository-hosting API configuration
    pub repos: ReposConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Trend source configuration
///
/// Passed into the adapter at construction time; there is no module-level
/// client state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsConfig {
    /// Trend source base URL
    pub base_url: String,

    /// Region code for trend queries
    pub geo: String,

    /// Locale for trend queries
    pub locale: String,

    /// Timezone offset in minutes (540 = KST)
    pub tz_offset: i32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Repository-hosting API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReposConfig {
    /// API base URL
    pub api_base: String,

    /// Access token (optional)
    pub token: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://trends.google.com/trends/api"),
            geo: String::from("KR"),
            locale: String::from("ko-KR"),
            tz_offset: 540,
            request_timeout_secs: 10,
        }
    }
}

impl Default for ReposConfig {
    fn default() -> Self {
        Self {
            api_base: String::from("https://api.github.com"),
            token: None,
            request_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl TrendsConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ReposConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let trends_base_url = std::env::var("PADO_TRENDS_BASE_URL")
            .unwrap_or_else(|_| TrendsConfig::default().base_url);

        let geo = std::env::var("PADO_TRENDS_GEO").unwrap_or_else(|_| String::from("KR"));

        let locale =
            std::env::var("PADO_TRENDS_LOCALE").unwrap_or_else(|_| String::from("ko-KR"));

        let tz_offset = std::env::var("PADO_TRENDS_TZ")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(540);

        let request_timeout_secs = std::env::var("PADO_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        let repos_api_base = std::env::var("PADO_REPOS_API_BASE")
            .unwrap_or_else(|_| ReposConfig::default().api_base);

        let repos_token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let log_level = std::env::var("PADO_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format = std::env::var("PADO_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            trends: TrendsConfig {
                base_url: trends_base_url,
                geo,
                locale,
                tz_offset,
                request_timeout_secs,
            },
            repos: ReposConfig {
                api_base: repos_api_base,
                token: repos_token,
                request_timeout_secs,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.trends.base_url.is_empty() {
            anyhow::bail!("trends base_url must not be empty");
        }

        if self.trends.request_timeout_secs == 0 {
            anyhow::bail!("request timeout must be greater than 0");
        }

        if self.trends.geo.is_empty() {
            anyhow::bail!("geo must not be empty");
        }

        if self.repos.api_base.is_empty() {
            anyhow::bail!("repos api_base must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trends.geo, "KR");
        assert_eq!(config.trends.tz_offset, 540);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.trends.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = Config::default();
        config.trends.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.trends.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let restored: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.trends.locale, "ko-KR");
    }
}
