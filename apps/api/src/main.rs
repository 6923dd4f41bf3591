mod config;
mod digest;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionService, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
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

    info!("Starting Nutshell API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client; a missing key leaves the digest endpoint answering 500
    let completion: Option<Arc<dyn CompletionService>> = match LlmClient::from_config(&config)? {
        Some(client) => {
            info!(
                "LLM client initialized (model: {}, temperature: {}, max_tokens: {})",
                config.model, config.temperature, config.max_tokens
            );
            let client: Arc<dyn CompletionService> = Arc::new(client);
            Some(client)
        }
        None => {
            warn!("OPENAI_API_KEY is not set; digest requests will be rejected as not configured");
            None
        }
    };

    let state = AppState {
        completion,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
