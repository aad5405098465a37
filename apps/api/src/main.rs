mod ats;
mod config;
mod errors;
mod grading;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::grading::grader::{DisabledGrader, LlmQualityGrader, QualityGrader};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cv-ats v{}", env!("CARGO_PKG_VERSION"));

    // Initialize quality grader (disabled without GROQ_API_KEY)
    let grader: Arc<dyn QualityGrader> = match &config.groq_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone());
            info!(
                "LLM quality grader enabled (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.grader_timeout
            );
            Arc::new(LlmQualityGrader::new(llm))
        }
        None => {
            info!("GROQ_API_KEY not set, ATS scores are rule-based only");
            Arc::new(DisabledGrader)
        }
    };

    info!(
        "ATS score cache: ttl={:?}, capacity={}",
        config.cache_ttl, config.cache_capacity
    );

    // Build app state
    let state = AppState::new(config.clone(), grader);

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
