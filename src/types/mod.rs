use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AskRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

// ============= Retrieval Types =============

/// A document snippet returned by the similarity search.
///
/// Matches arrive ranked by `similarity` descending and are read-only to
/// the pipeline. The `metadata` object is expected to carry a `kitab` key
/// naming the reference work the snippet came from, but nothing breaks
/// when it does not (see [`crate::rag::prompt`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMatch {
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub similarity: f32,
}

/// Similarity-search cutoffs supplied to the document store.
///
/// These are deployment configuration, not algorithmic constants: the
/// store applies `threshold` as the minimum similarity score and caps the
/// result set at `count`.
#[derive(Debug, Clone, Copy)]
pub struct RetrievalPolicy {
    pub threshold: f32,
    pub count: usize,
}

impl Default for RetrievalPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            count: 3,
        }
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Embedding(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Retrieval(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Generation(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
