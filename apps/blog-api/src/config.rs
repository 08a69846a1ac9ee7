//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The database file location is fixed; only the pool size is tunable.
    pub fn from_env() -> Self {
        let database = DatabaseConfig::new(
            parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 5),
            parse_or(env::var("DB_MIN_CONNECTIONS").ok(), 1),
        );

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 5000),
            database,
        }
    }
}

/// Parse an optional raw value, falling back to `default` when it is absent
/// or malformed.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
