mod app;

use anyhow::Result;
use std::fs::{self, OpenOptions};

use tracing_subscriber::{prelude::*, EnvFilter};

use gamedex_core::{
    catalog::CatalogStore,
    config::{self, AppConfig},
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;

    let store = CatalogStore::new(&config.data_path);
    let catalog = match store.records() {
        Ok(records) => {
            tracing::info!(total = records.len(), path = %store.source().display(), "Catalog loaded");
            records
        }
        Err(err) => {
            // Malformed or unreachable catalog: browse an empty one.
            tracing::error!("Failed to load catalog: {err:#}");
            Vec::new()
        }
    };

    let mut app = app::GamedexApp::new(config, catalog);
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("gamedex.log");

    let env_filter = EnvFilter::from_default_env();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
