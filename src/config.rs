//! Host configuration loaded from the environment.
//!
//! Parsing goes through a lookup function so tests can supply values without
//! touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_CLIENT_DIST_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: AddrParseError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built client (`index.html`, wasm, css).
    pub client_dist_dir: PathBuf,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `HOST` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `HOST` is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let host = match get("HOST") {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => DEFAULT_HOST,
        };
        let client_dist_dir = get("CLIENT_DIST_DIR").map_or_else(|| PathBuf::from(DEFAULT_CLIENT_DIST_DIR), PathBuf::from);

        Ok(Self { host, port, client_dist_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
