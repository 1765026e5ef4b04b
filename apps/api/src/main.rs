mod config;
mod errors;
mod llm_client;
mod models;
mod retrieval;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::retrieval::VerseRetriever;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Verse Finder API v{}", env!("CARGO_PKG_VERSION"));

    let model = build_model(&config)?;
    let retriever = VerseRetriever::new(model);

    let state = AppState {
        retriever,
        config: config.clone(),
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

/// Builds the Gemini client when a key is configured. `None` keeps the
/// service up; requests then report the missing credential in-band.
fn build_model(config: &Config) -> Result<Option<Arc<dyn TextGenerator>>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY is not set; verse requests will report a configuration error");
        return Ok(None);
    };

    let client = GeminiClient::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
        Duration::from_secs(config.model_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", client.model());

    Ok(Some(Arc::new(client)))
}
