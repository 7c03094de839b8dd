//! Question answering handlers.

use crate::{
    types::{AppError, AskRequest, AskResponse, HealthResponse, Result},
    AppState,
};
use axum::{body::Bytes, extract::State, Json};
use std::time::Instant;
use uuid::Uuid;

/// Answer a question through the RAG pipeline.
#[utoipa::path(
    post,
    path = "/",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Generated answer", body = AskResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Pipeline failure")
    ),
    tag = "chat"
)]
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<AskResponse>> {
    // Parsed by hand so a malformed body maps to the same {"error": ...}
    // shape as every other failure, not the extractor's default reject.
    let request: AskRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("invalid request body: {e}")))?;

    let request_id = Uuid::new_v4();
    let start = Instant::now();

    let answer = state.engine.answer(&request.prompt).await.inspect_err(|e| {
        tracing::warn!(%request_id, error = %e, "pipeline failed");
    })?;

    tracing::info!(
        %request_id,
        prompt_chars = request.prompt.chars().count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "answer generated"
    );

    Ok(Json(AskResponse { answer }))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "chat"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.engine.model_name().to_string(),
    })
}
