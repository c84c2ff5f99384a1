//! Runtime Configuration
//!
//! Loads and validates the service configuration from environment variables
//! at startup. Invalid values abort startup with a descriptive error instead
//! of falling back silently.

use anyhow::{bail, Context};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 49069;
pub const DEFAULT_SEARCH_API_URL: &str = "http://api.duckduckgo.com";
pub const DEFAULT_HISTORY_FILE: &str = "data/query-history.jsonl";

/// Deployment mode, reported by the root endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
            AppEnv::Test => "test",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => bail!("APP_ENV must be one of development, production, test (got {other:?})"),
        }
    }
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub env: AppEnv,
    pub search_api_url: String,
    pub history_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("APP_ENV").ok(),
            std::env::var("SEARCH_API_URL").ok(),
            std::env::var("HISTORY_FILE").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        env: Option<String>,
        search_api_url: Option<String>,
        history_file: Option<String>,
    ) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let env = match env {
            Some(raw) => raw.parse()?,
            None => AppEnv::Development,
        };

        let search_api_url = search_api_url.unwrap_or_else(|| DEFAULT_SEARCH_API_URL.to_string());
        if search_api_url.is_empty() {
            bail!("SEARCH_API_URL must not be empty");
        }

        let history_file = PathBuf::from(
            history_file.unwrap_or_else(|| DEFAULT_HISTORY_FILE.to_string()),
        );

        Ok(Self {
            port,
            env,
            search_api_url,
            history_file,
        })
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let port: u16 = raw
        .parse()
        .with_context(|| format!("PORT must be a valid number between 1 and 65535 (got {raw:?})"))?;
    if port == 0 {
        bail!("PORT must be between 1 and 65535");
    }
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(None, None, None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.env, AppEnv::Development);
        assert_eq!(config.search_api_url, DEFAULT_SEARCH_API_URL);
        assert_eq!(config.history_file, PathBuf::from(DEFAULT_HISTORY_FILE));
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_vars(
            Some("8080".to_string()),
            Some("production".to_string()),
            Some("http://localhost:9000".to_string()),
            Some("/tmp/history.jsonl".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.env, AppEnv::Production);
        assert_eq!(config.search_api_url, "http://localhost:9000");
        assert_eq!(config.history_file, PathBuf::from("/tmp/history.jsonl"));
    }

    #[test]
    fn test_port_rejects_garbage() {
        assert!(AppConfig::from_vars(Some("not-a-port".to_string()), None, None, None).is_err());
    }

    #[test]
    fn test_port_rejects_zero_and_out_of_range() {
        assert!(AppConfig::from_vars(Some("0".to_string()), None, None, None).is_err());
        assert!(AppConfig::from_vars(Some("70000".to_string()), None, None, None).is_err());
    }

    #[test]
    fn test_env_rejects_unknown_mode() {
        let err = AppConfig::from_vars(None, Some("staging".to_string()), None, None)
            .unwrap_err()
            .to_string();
        assert!(err.contains("staging"));
    }

    #[test]
    fn test_env_display_round_trip() {
        for env in [AppEnv::Development, AppEnv::Production, AppEnv::Test] {
            let parsed: AppEnv = env.to_string().parse().unwrap();
            assert_eq!(parsed, env);
        }
    }
}
