mod config;
mod errors;
mod lenses;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::lenses::generator::validate_project;
use crate::lenses::store::ContentStore;
use crate::llm_client::LlmClient;
use crate::models::Project;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lensfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Seed project shown until the first successful generation
    let seed = Project::seed().context("Bundled default project is not valid JSON")?;
    validate_project(&seed).context("Bundled default project failed validation")?;
    info!("Seed project loaded: {}", seed.meta.title);

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
        config.llm_timeout,
    )?;
    info!(
        "LLM client initialized (model: {}, schema mode: {})",
        llm_client::MODEL,
        config.schema_mode
    );

    let state = AppState::new(ContentStore::new(seed), Arc::new(llm), config.schema_mode);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front-end host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
