mod config;
mod nlp;
mod services;
mod state;
mod web;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    let shared: SharedState = Arc::new(AppState::new(config.clone()));
    let app = web::app(shared);

    tracing::info!("Starting MoodDecode NLP API...");
    tracing::info!("Available endpoints:");
    tracing::info!("  - POST /analyze_mood: analyze emotion from text");
    tracing::info!("  - POST /detect_crisis: detect crisis situations");
    tracing::info!("  - POST /summarize: summarize text content");
    tracing::info!(
        "Limits: {} bytes per text, {} summary sentences by default, {}s request timeout",
        config.max_text_bytes,
        config.summary_sentences,
        config.request_timeout_secs
    );

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
