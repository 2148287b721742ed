//! Entry point for the Quran companion.
//!
//! - Load user configuration from `conf/config.toml`.
//! - Open the local store and the content client.
//! - Launch the GUI, optionally at the address given as the first argument
//!   (for example `#/surah/18?a=10`).

mod api;
mod app;
mod cache;
mod config;
mod notify;
mod player;
mod router;
mod store;
mod text_utils;

use crate::api::ContentClient;
use crate::app::run_app;
use crate::config::load_config;
use crate::store::LocalStore;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_address = env::args().nth(1);
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        api = %config.api_base_url,
        offline_cache = config.offline_cache,
        "Starting Quran companion"
    );

    let store = LocalStore::open(&config.data_path())
        .with_context(|| format!("Failed to open data directory {}", config.data_dir))?;
    let client = ContentClient::new(&config).context("Failed to build the content client")?;
    run_app(config, store, client, initial_address).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
