//! HTTP API handlers and routes.
//!
//! The engine exposes a deliberately small surface, built on the Axum web
//! framework:
//!
//! - `POST /` - answer a question through the RAG pipeline;
//!   body `{"prompt": "..."}`, response `{"answer": "..."}`
//! - `OPTIONS /` - CORS preflight, answered by the CORS layer with 200
//!   before any route or handler runs
//! - `GET /health` - liveness probe with version and model info
//! - `GET /openapi.json` - OpenAPI description of the above
//!
//! Every response carries `Access-Control-Allow-Origin: *` and the
//! `Access-Control-Allow-Headers` list the legacy browser clients expect,
//! so the engine can be called directly from static frontends.

/// Request and response handlers.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use crate::types::{AskRequest, AskResponse, HealthResponse};
use utoipa::OpenApi;

/// OpenAPI description of the engine's HTTP surface.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::chat::ask, handlers::chat::health),
    components(schemas(AskRequest, AskResponse, HealthResponse)),
    tags((name = "chat", description = "Retrieval-augmented question answering"))
)]
pub struct ApiDoc;
