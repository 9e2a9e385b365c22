//! Configuration loading and representation.
//!
//! Everything is read from environment variables:
//!
//! | variable                   | default        |
//! |----------------------------|----------------|
//! | `BIND_ADDR`                | `0.0.0.0:8080` |
//! | `DATABASE_URL`             | unset (in-memory storage) |
//! | `DATABASE_MAX_CONNECTIONS` | `5`            |

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Postgres URL; `None` selects the in-memory repository.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the
    /// process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        message: "must be at least 1".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        message: e.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            database_url,
            database_max_connections,
        })
    }
}
