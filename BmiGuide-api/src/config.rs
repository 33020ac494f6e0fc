//! Runtime configuration read from the environment
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary before [`AppConfig::from_env`] is called.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// `HOST` is set but is not an IP address
    #[error("Invalid HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the listener binds to
    pub host: IpAddr,
    /// Port the listener binds to
    pub port: u16,
    /// Deployment environment reported by the health check
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `HOST`, `PORT` and `APP_ENV` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let environment = lookup("APP_ENV").unwrap_or(defaults.environment);

        Ok(Self { host, port, environment })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL printed in the startup log
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
