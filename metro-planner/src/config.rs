//! Server configuration.

use std::net::{AddrParseError, SocketAddr};

use crate::network::{Preset, UnknownPreset};

/// Environment variable holding the address to listen on.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Environment variable naming the network preset to serve.
pub const NETWORK_VAR: &str = "METRO_NETWORK";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid METRO_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid METRO_NETWORK: {0}")]
    UnknownNetwork(#[from] UnknownPreset),
}

/// Configuration for the planner server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Which built-in network to serve.
    pub network: Preset,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?;
        }

        if let Some(value) = lookup(NETWORK_VAR) {
            config.network = value.parse()?;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network: Preset::Ankara,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&str, &str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.network, Preset::Ankara);
    }

    #[test]
    fn reads_both_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (NETWORK_VAR, "Sample"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.network, Preset::Sample);
    }

    #[test]
    fn invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().starts_with("invalid METRO_BIND_ADDR \"localhost\""));
    }

    #[test]
    fn unknown_network() {
        let err = AppConfig::from_lookup(lookup(&[(NETWORK_VAR, "istanbul")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(_)));
        assert!(err.to_string().contains("istanbul"));
    }
}
