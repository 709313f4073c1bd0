use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Server configuration, loadable from TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Maximum accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8850".parse().expect("static addr"),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8850".parse::<SocketAddr>().unwrap());
        assert_eq!(c.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn toml_overrides_defaults() {
        let c = ServerConfig::from_toml_str("bind_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            ServerConfig::from_toml_str("bind_addr = 42"),
            Err(ServerError::Config(_))
        ));
    }
}
