use std::env;

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| "Invalid PORT")?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .map_err(|_| "Invalid DATABASE_MAX_CONNECTIONS")?;

        let allowed_origins = parse_origins(&lookup("ALLOWED_ORIGINS").unwrap_or_default());

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            database_max_connections,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "*")
        .map(str::to_string)
        .collect()
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
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server_port, 5000);
        assert_eq!(config.database_url, "sqlite://./data/recipes.db");
        assert_eq!(config.database_max_connections, 5);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.server_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "http://localhost:5173, http://example.com"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://example.com"]
        );
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_wildcard_origin_means_any() {
        let config = Config::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", "*")])).unwrap();
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err, "Invalid PORT");
    }
}
