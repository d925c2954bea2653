pub mod analysis;
pub mod error;

use crate::state::SharedState;
use crate::web::error::ApiError;
use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

async fn health() -> &'static str {
    "OK"
}

async fn home() -> Json<Value> {
    Json(json!({
        "message": "MoodDecode NLP API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /analyze_mood": "Analyze emotion from text",
            "POST /detect_crisis": "Detect crisis situations",
            "POST /summarize": "Summarize text content",
            "GET /health": "Health check"
        },
        "example_usage": {
            "analyze_mood": {
                "input": { "text": "I feel amazing today!" },
                "output": { "emotion": "happy" }
            },
            "detect_crisis": {
                "input": { "text": "I'm feeling hopeless and might hurt myself" },
                "output": { "crisis_detected": true }
            },
            "summarize": {
                "input": { "text": "Long paragraph here...", "max_sentences": 3 },
                "output": { "summary": "Condensed version..." }
            }
        }
    }))
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .merge(analysis::router(state))
        .fallback(not_found)
}

/// Routes plus the request-level middleware stack.
pub fn app(state: SharedState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let body_limit = analysis::body_limit(state.config.max_text_bytes);
    routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(timeout))
            .layer(DefaultBodyLimit::max(body_limit)),
    )
}
