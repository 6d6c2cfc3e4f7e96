//! Server configuration from the environment.

use std::env;
use std::net::SocketAddr;

// Port 8000, SQLite file next to the binary.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DATABASE_URL: &str = "marketplace.db";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    database_url: String,
}

impl ServerConfig {
    /// Construct a configuration with explicit values.
    pub fn new(bind_addr: SocketAddr, database_url: impl Into<String>) -> Self {
        Self {
            bind_addr,
            database_url: database_url.into(),
        }
    }

    /// Read configuration from `MARKET_BIND_ADDR` and `MARKET_DATABASE_URL`,
    /// falling back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns an error when `MARKET_BIND_ADDR` is not a valid socket
    /// address.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("MARKET_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
            .parse::<SocketAddr>()
            .map_err(|err| {
                std::io::Error::other(format!("invalid MARKET_BIND_ADDR: {err}"))
            })?;
        let database_url =
            env::var("MARKET_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Ok(Self::new(bind_addr, database_url))
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// SQLite database path or `:memory:`.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn explicit_values_round_trip() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().expect("valid address");
        let config = ServerConfig::new(addr, ":memory:");
        assert_eq!(config.bind_addr(), addr);
        assert_eq!(config.database_url(), ":memory:");
    }
}
