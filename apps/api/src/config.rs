//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The defaults alone give the stock setup: port 3000, database
//! `pasteleria.db`, static files from `public/`.

use pasteleria_core::{CredentialHasher, HashCost};
use pasteleria_db::DbConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP port
    pub port: u16,

    /// Address to bind
    pub bind_addr: String,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// Directory served for paths no API route matches
    pub static_dir: PathBuf,

    /// Password hashing work factor for new registrations
    pub hash_cost: HashCost,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = HashCost::default();

        let config = ApiConfig {
            port: parse_or(&lookup, "PORT", 3000)?,

            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),

            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("pasteleria.db")),

            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,

            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),

            hash_cost: HashCost::new(
                parse_or(&lookup, "PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
                parse_or(&lookup, "PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
                parse_or(&lookup, "PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
            ),
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Pool configuration for the document store.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.db_max_connections)
    }

    /// Builds the password hasher, rejecting an unusable cost.
    pub fn hasher(&self) -> Result<CredentialHasher, ConfigError> {
        CredentialHasher::new(self.hash_cost)
            .map_err(|e| ConfigError::InvalidHashCost(e.to_string()))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid password hashing cost: {0}")]
    InvalidHashCost(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("pasteleria.db"));
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.hash_cost, HashCost::default());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("DATABASE_PATH", "/var/lib/pasteleria/data.db"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("PASSWORD_HASH_ITERATIONS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.db_config().max_connections, 12);
        assert_eq!(
            config.db_config().database_path,
            PathBuf::from("/var/lib/pasteleria/data.db")
        );
        assert_eq!(config.hash_cost.iterations, 4);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = ApiConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(ref k)) if k == "PORT"));
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let result = ApiConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_unusable_hash_cost_rejected() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[("PASSWORD_HASH_PARALLELISM", "0")])).unwrap();
        assert!(matches!(
            config.hasher(),
            Err(ConfigError::InvalidHashCost(_))
        ));
    }
}
