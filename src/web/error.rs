use crate::nlp::AnalysisError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Text exceeds the {0} byte limit")]
    PayloadTooLarge(usize),
    #[error("Internal server error")]
    Analysis(#[from] AnalysisError),
    #[error("Internal server error")]
    Worker(#[from] tokio::task::JoinError),
    #[error("Endpoint not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn missing_text() -> Self {
        Self::InvalidInput("Missing 'text' field in request".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Analysis(_) | ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Analysis(e) => tracing::error!("Analysis failed: {}", e),
            ApiError::Worker(e) => tracing::error!("Analysis task failed: {}", e),
            ApiError::InvalidInput(_) | ApiError::PayloadTooLarge(_) => {
                tracing::warn!("Rejected request: {}", self)
            }
            ApiError::NotFound | ApiError::MethodNotAllowed => {}
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
