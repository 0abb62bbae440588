//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use postboard_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// Empty values count as unset, and so do ports that are unparsable or zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let port = |key: &str| parse::<u16>(var(key)).filter(|p| *p != 0);

        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            host: var("DB_HOST").unwrap_or(defaults.host),
            port: port("DB_PORT").unwrap_or(defaults.port),
            username: var("DB_USER").unwrap_or(defaults.username),
            password: var("DB_PASSWORD").unwrap_or(defaults.password),
            name: var("DB_NAME").unwrap_or(defaults.name),
            max_connections: parse(var("DB_MAX_CONNECTIONS")).unwrap_or(defaults.max_connections),
            min_connections: parse(var("DB_MIN_CONNECTIONS")).unwrap_or(defaults.min_connections),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: port("PORT").unwrap_or(3000),
            database,
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}
