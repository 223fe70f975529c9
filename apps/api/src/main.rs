mod assistant;
mod config;
mod db;
mod errors;
mod interview;
mod jobs;
mod matching;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::{AnthropicAssistant, ResumeAssistant};
use crate::config::Config;
use crate::db::create_pool;
use crate::interview::feedback::TemplateFeedbackSynthesizer;
use crate::jobs::provider::{JSearchProvider, JobProvider};
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

    info!("Starting CareerLaunch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Live job search is optional — without a key the demo catalog serves
    // every search.
    let jobs: Option<Arc<dyn JobProvider>> = match &config.rapidapi_key {
        Some(key) => {
            info!("Job search provider configured ({})", config.rapidapi_host);
            Some(Arc::new(JSearchProvider::new(
                key.clone(),
                config.rapidapi_host.clone(),
            )))
        }
        None => {
            info!("No job search API key — serving demo catalog only");
            None
        }
    };

    // Resume assistant is optional — without a key the canned fallback
    // content is served.
    let assistant: Option<Arc<dyn ResumeAssistant>> = match &config.anthropic_api_key {
        Some(key) => {
            info!("Resume assistant configured (model: {})", assistant::MODEL);
            Some(Arc::new(AnthropicAssistant::new(key.clone())))
        }
        None => {
            info!("No assistant API key — serving canned resume content");
            None
        }
    };

    // Feedback synthesizer — the placeholder heuristic until a real
    // evaluator backend lands.
    let synthesizer = Arc::new(TemplateFeedbackSynthesizer::new());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        jobs,
        assistant,
        synthesizer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
