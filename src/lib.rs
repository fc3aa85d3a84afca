//! Rustdex - An interactive Pokedex CLI
//!
//! Pages through PokeAPI location areas, explores them for Pokemon, catches
//! them probabilistically, and inspects the local collection. All network
//! responses are deduplicated through a TTL-expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeClient;
pub use cache::Cache;
pub use commands::Session;
pub use config::Config;
pub use tasks::spawn_reap_task;
