//! Cache Entry Module
//!
//! Defines the structure for individual cached payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response payload with its insertion timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response body
    pub value: Vec<u8>,
    /// When the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns the entry's age relative to `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time, which
    /// can happen when a reap pass captured its reference timestamp just
    /// before a concurrent insert.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry's age relative to `now` exceeds `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is NOT
    /// expired; expiry requires strictly exceeding the TTL.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
