//! Cache Module
//!
//! In-memory response cache with TTL expiry driven by a background reap task.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::Cache;
