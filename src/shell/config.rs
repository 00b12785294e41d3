//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_HOST` - Bind address of the API server (default: 0.0.0.0)
//! - `STOREFRONT_PORT` - Listen port of the API server (default: 8000)
//! - `STOREFRONT_API_URL` - Base URL the cart client talks to (default: http://localhost:8000)
//! - `STOREFRONT_CART_FILE` - File the cart client persists its cart in (default: carrinho.json)
//! - `RUST_LOG` - Log filter, read by the tracing subscriber

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CART_FILE: &str = "carrinho.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub api_url: String,
    pub cart_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or_default("STOREFRONT_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_or_default("STOREFRONT_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;
        let api_url = get_or_default("STOREFRONT_API_URL", DEFAULT_API_URL);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_API_URL".to_string(),
                "expected an http:// or https:// URL".to_string(),
            ));
        }
        let cart_file = PathBuf::from(get_or_default("STOREFRONT_CART_FILE", DEFAULT_CART_FILE));

        Ok(Self {
            host,
            port,
            api_url,
            cart_file,
        })
    }

    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
