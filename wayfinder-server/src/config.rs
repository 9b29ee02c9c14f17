use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::error::ServerError;

/// Server settings read from a TOML file; every field has a default
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub data: DataSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub request_timeout_secs: u64,
    /// Requests processed at the same time
    pub concurrency_limit: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout_secs: 10,
            concurrency_limit: 256,
        }
    }
}

impl ServerSection {
    /// Both middleware limits must be non-zero
    fn validate(&self) -> Result<(), ServerError> {
        if self.request_timeout_secs == 0 {
            return Err(ServerError::InvalidSetting {
                key: "server.request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.concurrency_limit == 0 {
            return Err(ServerError::InvalidSetting {
                key: "server.concurrency_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Airport data file (`pois`, `zones`, `navGraph`)
    pub path: PathBuf,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("wayfinder-core/data/airport.json"),
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ServerError> {
        let config: Self = toml::from_str(contents)?;
        config.server.validate()?;
        Ok(config)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ServerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.server.request_timeout_secs, 10);
        assert_eq!(config.data.path, PathBuf::from("wayfinder-core/data/airport.json"));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [server]
            bind = "0.0.0.0:9000"

            [data]
            path = "/srv/airport.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(config.server.concurrency_limit, 256);
        assert_eq!(config.data.path, PathBuf::from("/srv/airport.json"));
    }

    #[test]
    fn test_rejects_malformed_bind() {
        assert!(Config::from_toml_str("[server]\nbind = \"nowhere\"").is_err());
    }

    #[test]
    fn test_rejects_zero_limits() {
        for contents in [
            "[server]\nconcurrency_limit = 0",
            "[server]\nrequest_timeout_secs = 0",
        ] {
            let err = Config::from_toml_str(contents).unwrap_err();
            assert!(
                matches!(err, ServerError::InvalidSetting { .. }),
                "{contents}: {err}"
            );
        }
        assert!(Config::from_toml_str("[server]\nconcurrency_limit = 1").is_ok());
    }
}
