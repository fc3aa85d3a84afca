//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and reap interval in seconds
    pub cache_ttl: u64,
    /// Base URL of the PokeAPI, without trailing slash
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

/// Default PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL / reap interval in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - API base URL (default: `https://pokeapi.co/api/v2`)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_timeout: env::var("HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.http_timeout, 30);
    }

    // Single test for everything env-var driven, so parallel tests never
    // race on the process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_TTL");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("HTTP_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout, 30);

        env::set_var("POKEAPI_BASE_URL", "http://localhost:9000/api/v2/");
        let config = Config::from_env();
        env::remove_var("POKEAPI_BASE_URL");
        assert_eq!(config.base_url, "http://localhost:9000/api/v2");
    }
}
