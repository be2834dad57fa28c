//! Health check endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::context::AppContext;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the document store is readable.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
async fn health_check(State(context): State<AppContext>) -> Json<HealthResponse> {
    let store_healthy = context.health_check().await.is_ok();

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse { status, version: env!("CARGO_PKG_VERSION"), store_healthy })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppContext> {
    Router::new().route("/health", get(health_check))
}
