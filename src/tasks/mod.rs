//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the session.
//!
//! # Tasks
//! - Reap: removes over-age cache entries at the configured interval

mod reaper;

pub use reaper::spawn_reap_task;
