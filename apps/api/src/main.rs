mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::catalog::Catalog;
use crate::generation::generator::CandidateGenerator;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileMedium, MemoryMedium, StorageLimits, StorageManager, StorageMedium};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Scout API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    let generator = Arc::new(CandidateGenerator::new(
        Arc::new(catalog),
        Duration::from_millis(config.generation_delay_ms),
    ));

    let store = Arc::new(build_store(&config));

    let state = AppState {
        config: config.clone(),
        generator,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in tables unless `CATALOG_PATH` points at a JSON override.
fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?
        }
        None => Catalog::builtin(),
    };
    catalog.validate().context("Catalog failed validation")?;
    info!(
        "Catalog ready: {} roles, {} name regions",
        catalog.roles.len(),
        catalog.regions.len()
    );
    Ok(catalog)
}

fn build_store(config: &Config) -> StorageManager {
    let limits = StorageLimits {
        max_campaigns: config.max_campaigns,
        max_candidates_per_campaign: config.max_candidates_per_campaign,
    };

    if config.storage_disabled {
        warn!("Candidate storage disabled; batches will not be persisted");
        return StorageManager::unavailable(limits);
    }

    let medium: Arc<dyn StorageMedium> = match &config.storage_dir {
        Some(dir) => {
            let medium = FileMedium::new(dir.clone());
            info!("Persisting candidates under {}", medium.root().display());
            Arc::new(medium)
        }
        None => {
            info!("Persisting candidates in memory");
            Arc::new(MemoryMedium::default())
        }
    };
    info!(
        "Storage caps: {} campaigns, {} candidates each",
        limits.max_campaigns, limits.max_candidates_per_campaign
    );
    StorageManager::new(medium, limits)
}
