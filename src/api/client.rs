//! PokeAPI Client
//!
//! Fetches location areas and Pokemon over HTTP. Every request goes through
//! the response cache first, keyed by the fully qualified URL; on a miss the
//! raw body is written back before decoding, so repeat lookups within the
//! TTL never touch the network.

use std::time::Duration;

use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{DexError, Result};
use crate::models::{LocationArea, Pokemon};

// == Poke Client ==
/// Cached HTTP client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeClient {
    /// Underlying HTTP client (connection-pooled, shared by clones)
    http: reqwest::Client,
    /// API base URL without trailing slash
    base_url: String,
    /// Response cache shared with the background reap task
    cache: Cache,
}

impl PokeClient {
    // == Constructor ==
    /// Creates a client against `base_url` backed by `cache`.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://pokeapi.co/api/v2`
    /// * `cache` - response cache handle; clones share one store
    /// * `timeout` - per-request HTTP timeout
    pub fn new(base_url: impl Into<String>, cache: Cache, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            cache,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            cache,
            Duration::from_secs(config.http_timeout),
        )
    }

    // == Location Area ==
    /// Fetches one location area by numeric id or name.
    pub async fn location_area(&self, id_or_name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, id_or_name);
        let body = self.fetch_cached(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches one Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_cached(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Fetch Cached ==
    /// Returns the raw response body for `url`, consulting the cache first.
    ///
    /// On a miss the body is fetched over HTTP and written back into the
    /// cache before returning. Non-success statuses are surfaced as errors
    /// and never cached, so a later retry of the same command hits the
    /// network again.
    pub async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        debug!(%url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }
}
