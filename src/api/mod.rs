//! PokeAPI Client Module
//!
//! HTTP client for the remote Pokemon API, with all fetches deduplicated
//! through the TTL response cache.

mod client;

pub use client::PokeClient;
