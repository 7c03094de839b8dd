use crate::api::{handlers, ApiDoc};
use crate::AppState;
use axum::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS};
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Request headers the legacy browser clients send. The value is mirrored
/// verbatim on every response, preflight included.
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Build the application router with CORS, header, and trace layers.
pub fn create_router(state: AppState) -> Router {
    // The CORS layer answers OPTIONS before any route or handler runs,
    // so a preflight never touches the pipeline.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", post(handlers::chat::ask))
        .route("/health", get(handlers::chat::health))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
