//! Listen configuration for the gateway binary.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "SPELLBOOK_LISTEN_ADDR";

/// Listen address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Errors that can occur while reading gateway configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configured listen address is not a valid `host:port` pair.
    #[error("invalid listen address '{addr}': {source}")]
    InvalidListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the gateway.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl GatewayConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if the configured address
    /// cannot be parsed as a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var(LISTEN_ADDR_VAR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());
        Self::from_addr(&addr)
    }

    /// Build a config from an explicit address string.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if `addr` cannot be parsed
    /// as a socket address.
    pub fn from_addr(addr: &str) -> Result<Self, ConfigError> {
        let listen_addr = addr.parse().map_err(|source| ConfigError::InvalidListenAddr {
            addr: addr.to_owned(),
            source,
        })?;
        Ok(Self { listen_addr })
    }
}
