//! Web front-end configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_max_body_bytes() -> usize {
    64 * 1024
}

const fn default_max_sessions() -> usize {
    1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind; `0` picks a free port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the form in the default browser once the server is listening.
    #[serde(default)]
    pub open_browser: bool,

    /// Largest accepted request body (the submitted form).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Browser sessions kept in memory before the oldest is evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: false,
            max_body_bytes: default_max_body_bytes(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host", "must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::invalid(
                "server.max_body_bytes",
                "must be greater than zero",
            ));
        }
        if self.max_sessions == 0 {
            return Err(ConfigError::invalid(
                "server.max_sessions",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_flask_dev_server() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(!config.open_browser);
        assert_eq!(config.max_body_bytes, 65_536);
    }

    #[test]
    fn rejects_zero_limits() {
        let config = ServerConfig {
            max_sessions: 0,
            ..Default::default()
        };
        let err = config.validate().expect_err("zero sessions should fail");
        assert!(err.to_string().contains("server.max_sessions"));
    }

    #[test]
    fn rejects_blank_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
