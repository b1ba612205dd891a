//! Backend configuration, read once at startup from the environment.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

pub const DATABASE_URL_VAR: &str = "REPORTS_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "REPORTS_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "REPORTS_CORS_ORIGIN";
pub const LOG_FILTER_VAR: &str = "REPORTS_LOG_FILTER";

const DEFAULT_DATABASE_URL: &str = "sqlite:reports.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin the frontend is served from
    pub cors_origin: HeaderValue,
    /// Default tracing filter, `RUST_LOG` takes precedence
    pub log_filter: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BackendConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset variables take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let cors_origin = lookup(CORS_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            database_url: lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: bind_addr
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", BIND_ADDR_VAR, bind_addr))?,
            cors_origin: HeaderValue::from_str(&cors_origin)
                .with_context(|| format!("{} is not a valid origin: {}", CORS_ORIGIN_VAR, cors_origin))?,
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = BackendConfig::from_lookup(lookup_from(&[])).unwrap();
        let default = BackendConfig::default();

        assert_eq!(config.database_url, "sqlite:reports.db");
        assert_eq!(config.bind_addr, default.bind_addr);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.cors_origin, "http://localhost:8080");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (BIND_ADDR_VAR, "0.0.0.0:9000"),
            (CORS_ORIGIN_VAR, "https://reports.example.com"),
            (LOG_FILTER_VAR, "debug,sqlx=warn"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.cors_origin, "https://reports.example.com");
        assert_eq!(config.log_filter, "debug,sqlx=warn");
    }

    #[test]
    fn test_bad_bind_addr_is_an_error() {
        let err = BackendConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }

    #[test]
    fn test_bad_cors_origin_is_an_error() {
        let result = BackendConfig::from_lookup(lookup_from(&[(CORS_ORIGIN_VAR, "http://bad\norigin")]));
        assert!(result.is_err());
    }
}
