//! Cache Reap Task
//!
//! Background task that periodically removes over-age cache entries.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that reaps expired cache entries forever.
///
/// The task sleeps for `interval` between passes and measures entry age
/// against a reference timestamp taken fresh at each tick, so the effective
/// TTL stays fixed over the process lifetime. Expiry is therefore eventual:
/// an entry can outlive its TTL by at most one full interval before a pass
/// removes it.
///
/// # Arguments
/// * `cache` - a clone of the cache handle to sweep
/// * `interval` - time between reap passes; the session wires this to the
///   same duration as the cache TTL
///
/// # Returns
/// A `JoinHandle` the owner aborts during shutdown. The task itself never
/// returns.
pub fn spawn_reap_task(cache: Cache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reap task with interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.reap(Instant::now());

            if removed > 0 {
                info!("cache reap: removed {} expired entries", removed);
            } else {
                debug!("cache reap: no expired entries found");
            }
        }
    })
}
