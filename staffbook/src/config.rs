//! Runtime settings read from the environment.
//!
//! | Variable       | Default           |
//! |----------------|-------------------|
//! | `DATABASE_URL` | `sqlite::memory:` |
//! | `BIND_ADDRESS` | `0.0.0.0:3000`    |
//! | `RUST_LOG`     | `info`            |

use std::env;
use std::fmt;
use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Settings {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `BIND_ADDRESS` is not a socket address.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup, applying defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Fails when `BIND_ADDRESS` is not a socket address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_value =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let bind_address = bind_value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddress {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            database_url,
            bind_address,
            log_filter,
        })
    }
}

#[derive(Debug)]
pub enum SettingsError {
    InvalidBindAddress {
        value: String,
        source: AddrParseError,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBindAddress { value, source } => {
                write!(f, "BIND_ADDRESS '{value}' is not a socket address: {source}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBindAddress { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.bind_address, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://staff.db?mode=rwc"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("RUST_LOG", "staffbook=debug"),
        ]))
        .unwrap();
        assert_eq!(settings.database_url, "sqlite://staff.db?mode=rwc");
        assert_eq!(settings.bind_address.port(), 8080);
        assert_eq!(settings.log_filter, "staffbook=debug");
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = Settings::from_lookup(lookup_from(&[("BIND_ADDRESS", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("'localhost'"));
    }
}
