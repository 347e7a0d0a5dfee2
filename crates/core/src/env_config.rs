//! Environment variable parsing with warn-level logging for invalid values.

use std::time::Duration;

use crate::constants::{
    ACQUIRE_TIMEOUT_VAR, DATABASE_URL_VAR, MAX_CONNECTIONS_VAR, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use crate::error::{AppError, Result};

/// Parse a raw environment value with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Connection settings for the migration target.
#[derive(Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl std::fmt::Debug for DbConfig {
    // The URL usually carries a password.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(AppError::MissingEnv(DATABASE_URL_VAR))?;

        let max_connections =
            parse_with_default(MAX_CONNECTIONS_VAR, lookup(MAX_CONNECTIONS_VAR), PG_POOL_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(AppError::InvalidConfig(format!("{MAX_CONNECTIONS_VAR} must be at least 1")));
        }

        let acquire_secs = parse_with_default(
            ACQUIRE_TIMEOUT_VAR,
            lookup(ACQUIRE_TIMEOUT_VAR),
            PG_POOL_ACQUIRE_TIMEOUT_SECS,
        );

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
            idle_timeout: Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_env_parse_valid_value() {
        let result: u32 = parse_with_default("X", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let result: u32 = parse_with_default("X", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let result: u32 = parse_with_default("X", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_parse_empty_value() {
        let result: u32 = parse_with_default("X", Some(String::new()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_db_config_requires_database_url() {
        let err = DbConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::MissingEnv(DATABASE_URL_VAR)));
    }

    #[test]
    fn test_db_config_rejects_blank_database_url() {
        let err = DbConfig::from_lookup(lookup_from(&[(DATABASE_URL_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, AppError::MissingEnv(_)));
    }

    #[test]
    fn test_db_config_defaults() {
        let config =
            DbConfig::from_lookup(lookup_from(&[(DATABASE_URL_VAR, "postgres://localhost/app")]))
                .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/app");
        assert_eq!(config.max_connections, PG_POOL_MAX_CONNECTIONS);
        assert_eq!(config.acquire_timeout, Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS));
    }

    #[test]
    fn test_db_config_overrides_and_bad_values() {
        let config = DbConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "postgres://localhost/app"),
            (MAX_CONNECTIONS_VAR, "5"),
            (ACQUIRE_TIMEOUT_VAR, "soon"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS));
    }

    #[test]
    fn test_db_config_rejects_zero_connections() {
        let err = DbConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "postgres://localhost/app"),
            (MAX_CONNECTIONS_VAR, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_db_config_debug_hides_url() {
        let config = DbConfig::from_lookup(lookup_from(&[(
            DATABASE_URL_VAR,
            "postgres://admin:hunter2@db/app",
        )]))
        .unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
