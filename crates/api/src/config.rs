//! Application configuration loaded from environment variables.

use guest_store::Table;
use thiserror::Error;

/// Errors raised while reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `GUESTLIST_TABLES` entry is not `<number>:<capacity>`.
    #[error("invalid table entry '{0}': expected <number>:<capacity>")]
    InvalidTableEntry(String),

    /// A seeded table cannot seat anyone.
    #[error("table {0} must have a capacity of at least 1")]
    InvalidCapacity(i32),
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATABASE_URL` — PostgreSQL connection string; the in-memory store is
///   used when unset
/// - `DATABASE_MAX_CONNECTIONS` — pool size (default: `5`)
/// - `GUESTLIST_TABLES` — tables seeded at startup, e.g. `"1:10,2:5"`
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub tables: Vec<Table>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tables = match std::env::var("GUESTLIST_TABLES") {
            Ok(entries) => parse_tables(&entries)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            tables,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            database_url: None,
            max_connections: 5,
            tables: Vec::new(),
        }
    }
}

/// Parses a comma-separated list of `<number>:<capacity>` pairs.
///
/// Whitespace around entries is ignored, as are empty entries.
pub fn parse_tables(entries: &str) -> Result<Vec<Table>, ConfigError> {
    entries.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || ConfigError::InvalidTableEntry(entry.to_string());
            let (number, capacity) = entry.split_once(':').ok_or_else(invalid)?;
            let number: i32 = number.trim().parse().map_err(|_| invalid())?;
            let capacity: i32 = capacity.trim().parse().map_err(|_| invalid())?;
            if capacity < 1 {
                return Err(ConfigError::InvalidCapacity(number));
            }
            Ok(Table::new(number, capacity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert!(config.database_url.is_none());
        assert_eq!(config.max_connections, 5);
        assert!(config.tables.is_empty());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_tables() {
        let tables = parse_tables("1:10, 2:5,,99999:10").unwrap();
        assert_eq!(
            tables,
            vec![Table::new(1, 10), Table::new(2, 5), Table::new(99999, 10)]
        );
    }

    #[test]
    fn test_parse_tables_empty() {
        assert!(parse_tables("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tables_rejects_malformed_entry() {
        let err = parse_tables("1:10,two:5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTableEntry(ref e) if e == "two:5"));

        let err = parse_tables("7").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTableEntry(_)));
    }

    #[test]
    fn test_parse_tables_rejects_zero_capacity() {
        let err = parse_tables("3:0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity(3)));
    }
}
