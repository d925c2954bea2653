use crate::nlp::AnalysisError;
use crate::services::Emotion;
use crate::state::SharedState;
use crate::web::error::ApiError;
use crate::web::method_not_allowed;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_SUMMARY_SENTENCES: usize = 50;
const PREVIEW_CHARS: usize = 50;
// JSON envelope around `text`: braces, keys, `max_sentences`.
const BODY_ENVELOPE_BYTES: usize = 1024;

#[derive(Deserialize)]
pub struct TextPayload {
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct SummarizePayload {
    pub text: Option<String>,
    pub max_sentences: Option<usize>,
}

#[derive(Serialize)]
pub struct EmotionResponse {
    pub emotion: Emotion,
}

#[derive(Serialize)]
pub struct CrisisResponse {
    pub crisis_detected: bool,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/analyze_mood", post(analyze_mood).fallback(method_not_allowed))
        .route("/detect_crisis", post(detect_crisis).fallback(method_not_allowed))
        .route("/summarize", post(summarize).fallback(method_not_allowed))
        .with_state(state)
}

async fn analyze_mood(
    State(state): State<SharedState>,
    payload: Result<Json<TextPayload>, JsonRejection>,
) -> Result<Json<EmotionResponse>, ApiError> {
    let Json(payload) = payload.map_err(|r| reject_body(r, state.config.max_text_bytes))?;
    let text = validate_text(payload.text, state.config.max_text_bytes)?;

    let worker = Arc::clone(&state);
    let (text, emotion) = run_blocking(move || {
        let emotion = worker.emotion.classify(&text)?;
        Ok((text, emotion))
    })
    .await?;

    tracing::debug!("Mood analysis input: {}", preview(&text));
    tracing::info!("Mood analysis: {} chars -> {}", text.chars().count(), emotion);
    Ok(Json(EmotionResponse { emotion }))
}

async fn detect_crisis(
    State(state): State<SharedState>,
    payload: Result<Json<TextPayload>, JsonRejection>,
) -> Result<Json<CrisisResponse>, ApiError> {
    let Json(payload) = payload.map_err(|r| reject_body(r, state.config.max_text_bytes))?;
    let text = validate_text(payload.text, state.config.max_text_bytes)?;

    let worker = Arc::clone(&state);
    let (text, assessment) = run_blocking(move || {
        let assessment = worker.crisis.assess(&text)?;
        Ok((text, assessment))
    })
    .await?;

    tracing::debug!(
        "Crisis detection input: {} (phrases {:?}, compound {:.3})",
        preview(&text),
        assessment.matched_phrases,
        assessment.polarity.compound
    );
    tracing::info!(
        "Crisis detection: {} chars -> {} (score {:.2}, triggers {:?})",
        text.chars().count(),
        assessment.crisis_detected,
        assessment.crisis_score,
        assessment.triggers
    );
    Ok(Json(CrisisResponse {
        crisis_detected: assessment.crisis_detected,
    }))
}

async fn summarize(
    State(state): State<SharedState>,
    payload: Result<Json<SummarizePayload>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(payload) = payload.map_err(|r| reject_body(r, state.config.max_text_bytes))?;
    let text = validate_text(payload.text, state.config.max_text_bytes)?;

    let max_sentences = payload
        .max_sentences
        .unwrap_or(state.config.summary_sentences);
    if !(1..=MAX_SUMMARY_SENTENCES).contains(&max_sentences) {
        return Err(ApiError::InvalidInput(format!(
            "max_sentences must be between 1 and {}",
            MAX_SUMMARY_SENTENCES
        )));
    }

    let input_len = text.len();
    let worker = Arc::clone(&state);
    let summary =
        run_blocking(move || worker.summarizer.summarize(&text, max_sentences)).await?;

    tracing::info!(
        "Text summarization: input length {} -> summary length {}",
        input_len,
        summary.len()
    );
    Ok(Json(SummaryResponse { summary }))
}

/// Largest request body accepted for a given text limit. Every text byte
/// may arrive as a six-byte `\uXXXX` escape.
pub fn body_limit(max_text_bytes: usize) -> usize {
    max_text_bytes
        .saturating_mul(6)
        .saturating_add(BODY_ENVELOPE_BYTES)
}

/// Analysis is CPU-bound; it runs on the blocking pool so the timeout layer
/// can still answer while it works.
async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, AnalysisError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(job).await??)
}

fn reject_body(rejection: JsonRejection, max_text_bytes: usize) -> ApiError {
    tracing::debug!("Unreadable request body: {}", rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(max_text_bytes);
    }
    ApiError::missing_text()
}

fn validate_text(text: Option<String>, max_bytes: usize) -> Result<String, ApiError> {
    let text = text.ok_or_else(ApiError::missing_text)?;
    if text.trim().is_empty() {
        return Err(ApiError::InvalidInput("Text cannot be empty".to_string()));
    }
    if text.len() > max_bytes {
        return Err(ApiError::PayloadTooLarge(max_bytes));
    }
    Ok(text)
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        preview.push_str("...");
    }
    preview
}
