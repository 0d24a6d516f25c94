mod analytics;
mod catalog;
mod config;
mod errors;
mod models;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analytics::{Analytics, NoopAnalytics, TracingAnalytics};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},analytics={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Load the major catalog (file override or built-in table)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            let catalog = Catalog::builtin();
            info!(majors = catalog.len(), "Using built-in major catalog");
            catalog
        }
    };

    if catalog.is_empty() {
        warn!("Major catalog is empty; quiz recommendations will be unavailable");
    }

    // Initialize analytics sink
    let analytics: Arc<dyn Analytics> = if config.analytics_enabled {
        Arc::new(TracingAnalytics)
    } else {
        info!("Analytics disabled");
        Arc::new(NoopAnalytics)
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        analytics,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
