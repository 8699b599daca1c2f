mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::service::CatalogService;
use crate::catalog::store::{KeyValueStore, MemoryStore, RedisStore};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Organizer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the catalog store
    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url, &config.redis_prefix).await?),
        None => {
            warn!("REDIS_URL not set; catalog is kept in memory and lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    let catalog = CatalogService::new(
        store,
        config.seed_default_modules,
        config.similarity_threshold,
    );
    info!(
        "Catalog ready (cosine threshold {}, seed defaults: {})",
        config.similarity_threshold, config.seed_default_modules
    );

    // Initialize LLM client
    let llm = match &config.openrouter_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                config.llm_api_url.clone(),
                config.llm_model.clone(),
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            warn!("OPENROUTER_API_KEY not set; generation endpoints are disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        catalog,
        llm,
        config: config.clone(),
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
