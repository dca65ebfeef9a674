use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use taskdash::config::Config;
use taskdash::services::LocalStore;
use taskdash::session::SessionStore;
use taskdash::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default; the REPL stays quiet below warn.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let store = LocalStore::open(&config.storage.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.storage.data_dir))?;

    let mut session = SessionStore::new(store.clone(), config.latency.clone());
    if let Err(e) = session.restore() {
        eprintln!("Could not restore previous session: {}", e);
    }

    ui::run(session, store, config.latency).await
}
