mod analysis;
mod config;
mod db;
mod errors;
mod fetch;
mod llm_client;
mod models;
mod outreach;
mod profiles;
mod routes;
mod state;
mod util;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::fetch::ProfileFetcher;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("outreach_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite
    let pool = create_pool(&config.database_path).await?;
    run_migrations(&pool).await?;

    // Initialize the text-generation client and warm the model. A load
    // failure is not fatal — generation requests will surface it.
    let llm = Arc::new(LlmClient::new(
        config.model_base_url.clone(),
        config.model_name.clone(),
    ));
    if let Err(e) = llm.load_model().await {
        warn!("Model load failed ({e}); continuing without a warm model");
    } else {
        info!("Model '{}' loaded", config.model_name);
    }

    let fetcher = Arc::new(ProfileFetcher::new());

    let state = AppState::new(pool, llm.clone(), fetcher, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the model's memory on the inference server.
    llm.unload_model().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install ctrl-c handler: {e}");
    }
}
