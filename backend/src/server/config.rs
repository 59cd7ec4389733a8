//! Process configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;

/// Storage backend selection: a static, process-wide startup decision.
///
/// The mode is not hot-swappable; changing it requires a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// In-process store; contents are lost on restart.
    Volatile,
    /// PostgreSQL-backed store.
    Durable,
}

impl std::str::FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "volatile" => Ok(Self::Volatile),
            "durable" => Ok(Self::Durable),
            _ => Err(ConfigError::invalid("STORAGE_MODE", value)),
        }
    }
}

/// Configuration errors raised during startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("invalid value for {variable}: {value}")]
    Invalid {
        /// Offending environment variable.
        variable: &'static str,
        /// Observed value.
        value: String,
    },

    /// Durable mode was selected without a database URL.
    #[error("DATABASE_URL is required when STORAGE_MODE=durable")]
    MissingDatabaseUrl,
}

impl ConfigError {
    fn invalid(variable: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            variable,
            value: value.into(),
        }
    }
}

/// Application configuration gathered once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Selected storage backend.
    pub storage_mode: StorageMode,
    /// PostgreSQL URL; present whenever `storage_mode` is durable.
    pub database_url: Option<String>,
    /// Listening address for the HTTP server.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// `STORAGE_MODE` defaults to `volatile`; `DATABASE_URL` is required
    /// only in durable mode; `BIND_ADDR` defaults to `0.0.0.0:8000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_mode = match env::var("STORAGE_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageMode::Volatile,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if storage_mode == StorageMode::Durable && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::invalid("BIND_ADDR", value.as_str()))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8000)),
        };

        Ok(Self {
            storage_mode,
            database_url,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("volatile", StorageMode::Volatile)]
    #[case("durable", StorageMode::Durable)]
    #[case("DURABLE", StorageMode::Durable)]
    fn storage_mode_parses_known_values(#[case] raw: &str, #[case] expected: StorageMode) {
        assert_eq!(raw.parse::<StorageMode>().expect("parse mode"), expected);
    }

    #[rstest]
    fn storage_mode_rejects_unknown_values() {
        let err = "in_memory".parse::<StorageMode>().expect_err("unknown mode");
        assert!(err.to_string().contains("STORAGE_MODE"));
        assert!(err.to_string().contains("in_memory"));
    }

    #[rstest]
    fn missing_database_url_error_names_the_variable() {
        assert!(
            ConfigError::MissingDatabaseUrl
                .to_string()
                .contains("DATABASE_URL")
        );
    }
}
