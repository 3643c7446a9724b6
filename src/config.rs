//! Application configuration
//!
//! Loaded from environment variables with the `STACK_ADVISOR` prefix, using
//! `__` to separate nested values:
//!
//! - `STACK_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
//! - `STACK_ADVISOR__SERVER__LOG_LEVEL=debug` -> `server.log_level = "debug"`
//!
//! A `.env` file in the working directory is read first when present.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Host must not be empty")]
    EmptyHost,
}

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.host.trim().is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::default().prefix("STACK_ADVISOR").separator("__"))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default()
            .prefix("STACK_ADVISOR")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_source(env_source(&[])).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3100);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3100");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_source(env_source(&[
            ("STACK_ADVISOR__SERVER__PORT", "8088"),
            ("STACK_ADVISOR__SERVER__HOST", "0.0.0.0"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_type_fails_to_load() {
        let result = AppConfig::from_source(env_source(&[("STACK_ADVISOR__SERVER__PORT", "abc")]));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate() {
        let mut server = ServerConfig::default();
        assert_eq!(server.validate(), Ok(()));

        server.port = 0;
        assert_eq!(server.validate(), Err(ValidationError::InvalidPort));

        server.port = 80;
        server.host = " ".to_string();
        assert_eq!(server.validate(), Err(ValidationError::EmptyHost));
    }
}
