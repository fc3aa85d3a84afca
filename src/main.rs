//! Rustdex - An interactive Pokedex CLI
//!
//! Pages through PokeAPI location areas, explores them for Pokemon, catches
//! them probabilistically, and inspects the local collection. All network
//! responses are deduplicated through a TTL-expiring in-memory cache.

use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rustdex::{repl, spawn_reap_task, Cache, Config, PokeClient, Session};

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start the background reap task
/// 4. Build the cached API client and session
/// 5. Run the REPL until `exit`, EOF, or Ctrl+C
/// 6. Abort the reap task so shutdown is deterministic
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so log lines don't interleave with REPL output;
    // can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustdex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "configuration loaded: cache_ttl={}s, base_url={}, http_timeout={}s",
        config.cache_ttl, config.base_url, config.http_timeout
    );

    // One cache handle shared by the client and the reap task
    let ttl = Duration::from_secs(config.cache_ttl);
    let cache = Cache::new(ttl);
    let reap_handle = spawn_reap_task(cache.clone(), ttl);

    let client =
        PokeClient::from_config(&config, cache).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    println!("Starting Pokedex...");

    // Run the REPL, bailing out early on Ctrl+C
    tokio::select! {
        result = repl::run(&mut session) => {
            result.context("REPL failed")?;
        }
        _ = signal::ctrl_c() => {
            info!("received Ctrl+C, shutting down");
        }
    }

    // Abort the reap task
    reap_handle.abort();
    warn!("reap task aborted");

    Ok(())
}
