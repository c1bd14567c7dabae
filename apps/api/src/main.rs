mod catalog;
mod client;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::remote::RemotePostingCatalog;
use crate::catalog::{FixtureCatalog, InMemoryProfileStore, PostingCatalog};
use crate::client::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
use crate::client::types::JobQuery;
use crate::client::HireFlowClient;
use crate::config::Config;
use crate::matching::scorer::SkillOverlapScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireFlow match service v{}", env!("CARGO_PKG_VERSION"));

    let scorer = Arc::new(SkillOverlapScorer {
        floor: config.match_score_floor,
    });
    info!("Match scorer: skill-overlap (floor {})", config.match_score_floor.value());

    let catalog = build_catalog(&config)?;

    let state = AppState {
        scorer,
        catalog,
        profiles: Arc::new(InMemoryProfileStore::with_demo()),
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

/// Fixture postings unless a backend URL is configured.
fn build_catalog(config: &Config) -> Result<Arc<dyn PostingCatalog>> {
    let Some(base_url) = &config.backend_url else {
        info!("No HIREFLOW_API_URL set; serving fixture postings");
        return Ok(Arc::new(FixtureCatalog::default()));
    };

    let store: Arc<dyn TokenStore> = match &config.token_path {
        Some(path) => Arc::new(FileTokenStore::new(path)),
        None => Arc::new(MemoryTokenStore::default()),
    };
    let session = Session::new(store).context("Failed to load stored session token")?;
    let client = HireFlowClient::new(base_url.clone(), session)
        .context("Failed to build HireFlow client")?;

    info!("Reading postings from {base_url}");
    let query = JobQuery {
        limit: Some(100),
        ..Default::default()
    };
    Ok(Arc::new(RemotePostingCatalog::new(client).with_query(query)))
}
