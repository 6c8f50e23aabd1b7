//! Route table and handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{CrawlQuery, Exploration};
use crate::service::PaperGraphService;

/// Error body returned for any failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,

    /// Human-readable detail.
    pub details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody { error: self.code(), details: self.to_user_message() };
        (status, Json(body)).into_response()
    }
}

/// Create the HTTP router.
pub fn create_router(service: Arc<PaperGraphService>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/api/paper/{id}", get(get_paper_graph))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "scholar-graph",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(service): State<Arc<PaperGraphService>>) -> impl IntoResponse {
    let limits = service.limits();
    Json(serde_json::json!({
        "status": "ready",
        "service": "scholar-graph",
        "version": env!("CARGO_PKG_VERSION"),
        "store": service.store_backend(),
        "maxDepth": limits.max_depth,
        "maxFanOut": limits.max_fan_out
    }))
}

/// `GET /api/paper/{id}`: crawl around the paper and suggest collaborators.
async fn get_paper_graph(
    State(service): State<Arc<PaperGraphService>>,
    Path(id): Path<String>,
    query: Result<Query<CrawlQuery>, QueryRejection>,
) -> Result<Json<Exploration>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation("query", e.body_text()))?;
    let limits = query.resolve(service.limits())?;

    let exploration = service.explore_with(&id, limits).await.inspect_err(|e| {
        tracing::error!(id = %id, code = e.code(), error = %e, "Paper graph request failed");
    })?;

    Ok(Json(exploration))
}
