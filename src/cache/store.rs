//! Cache Store Module
//!
//! Shared-handle response cache: a HashMap of raw payloads behind a single
//! cache-wide mutex, expired by a periodic background reap pass.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::CacheEntry;

// == Cache ==
/// TTL response cache keyed by request URL.
///
/// `Cache` is a cheap-to-clone handle: every clone shares the same map and
/// lock, so the background reap task and any number of foreground callers
/// always observe one store. The cache holds no capacity bound; growth is
/// limited only by available memory.
///
/// Staleness is enforced exclusively by [`Cache::reap`], which the background
/// task drives once per TTL interval. [`Cache::get`] performs no age check,
/// so a read racing ahead of the next reap pass may return a just-expired
/// payload. That staleness window is bounded by one reap interval.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Key-to-entry mapping, guarded by its mutex
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    /// Maximum entry age before a reap pass removes it
    ttl: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    ///
    /// The caller wires up expiry by passing a clone of the handle to
    /// [`crate::tasks::spawn_reap_task`] with the same interval.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the configured entry TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamped with the current
    /// time. Last writer under the lock wins; this never fails.
    pub fn add(&self, key: &str, payload: Vec<u8>) {
        let mut entries = self.lock();
        entries.insert(key.to_string(), CacheEntry::new(payload));
    }

    // == Get ==
    /// Retrieves the payload stored for `key`, or `None` if absent.
    ///
    /// No age check happens here: an entry past its TTL is still returned
    /// until the next reap pass removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.lock();
        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry whose age relative to `now` exceeds the TTL.
    ///
    /// Returns the number of entries removed. The background task calls this
    /// with a fresh `Instant::now()` each tick; tests can pass synthetic
    /// timestamps to drive expiry deterministically.
    pub fn reap(&self, now: Instant) -> usize {
        let ttl = self.ttl;
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, entry| {
            let expired = entry.is_expired(now, ttl);
            if expired {
                trace!(%key, "reaping expired cache entry");
            }
            !expired
        });
        before - entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Acquires the store lock, recovering from poisoning.
    ///
    /// A panic while holding the lock can only leave the map in a state that
    /// is still a valid map (insert and retain are the only mutations), so
    /// continuing with the inner value is sound.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_cache_new_is_empty() {
        let cache = Cache::new(TTL);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.ttl(), TTL);
    }

    #[test]
    fn test_miss_then_hit() {
        let cache = Cache::new(TTL);

        assert_eq!(cache.get("https://pokeapi.co/api/v2/pokemon/pikachu"), None);

        cache.add("https://pokeapi.co/api/v2/pokemon/pikachu", b"{}".to_vec());
        assert_eq!(
            cache.get("https://pokeapi.co/api/v2/pokemon/pikachu"),
            Some(b"{}".to_vec())
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_last_write_wins() {
        let cache = Cache::new(TTL);

        cache.add("key", vec![1]);
        cache.add("key", vec![2]);

        assert_eq!(cache.get("key"), Some(vec![2]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_ignores_entry_age() {
        // Reads never check the TTL; only a reap pass removes entries.
        let cache = Cache::new(Duration::from_millis(1));
        cache.add("stale", vec![9]);

        thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("stale"), Some(vec![9]));
    }

    #[test]
    fn test_reap_removes_only_expired() {
        let cache = Cache::new(Duration::from_millis(100));

        cache.add("old", vec![1]);
        thread::sleep(Duration::from_millis(150));
        cache.add("new", vec![2]);

        let removed = cache.reap(Instant::now());
        assert_eq!(removed, 1);
        assert_eq!(cache.get("old"), None);
        assert_eq!(cache.get("new"), Some(vec![2]));
    }

    #[test]
    fn test_reap_no_premature_expiry() {
        let cache = Cache::new(Duration::from_secs(1));
        cache.add("y", b"fresh".to_vec());

        let removed = cache.reap(Instant::now());
        assert_eq!(removed, 0);
        assert_eq!(cache.get("y"), Some(b"fresh".to_vec()));
    }

    #[test]
    fn test_independent_keys() {
        let cache = Cache::new(Duration::from_millis(100));

        cache.add("first", vec![1]);
        let first_dead = Instant::now() + Duration::from_millis(150);

        thread::sleep(Duration::from_millis(120));
        cache.add("second", vec![2]);

        // "first" is past its TTL at the reference time, "second" is not.
        cache.reap(first_dead);
        assert_eq!(cache.get("first"), None);
        assert_eq!(cache.get("second"), Some(vec![2]));
    }

    #[test]
    fn test_clones_share_one_store() {
        let cache = Cache::new(TTL);
        let other = cache.clone();

        cache.add("shared", vec![7]);
        assert_eq!(other.get("shared"), Some(vec![7]));

        other.reap(Instant::now() + TTL + Duration::from_secs(1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_add_get_reap() {
        let cache = Cache::new(Duration::from_millis(10));
        let mut handles = Vec::new();

        for worker in 0..4 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("k{}", i % 16);
                    cache.add(&key, vec![worker, i as u8]);
                    if let Some(value) = cache.get(&key) {
                        // Values are never torn: always a full 2-byte payload.
                        assert_eq!(value.len(), 2);
                    }
                }
            }));
        }

        let reaper = {
            let cache = cache.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    cache.reap(Instant::now());
                    thread::yield_now();
                }
            })
        };

        for handle in handles {
            handle.join().unwrap();
        }
        reaper.join().unwrap();
    }
}
