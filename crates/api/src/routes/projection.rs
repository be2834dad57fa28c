//! Mastery completion projection endpoint

use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use hourglass_domain::Projection;
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::logging::log_request_outcome;

/// Request body for a projection. An empty object uses the configured pace
/// fallback and the observed average.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Overrides both the configured fixed pace and the observed average.
    #[serde(default)]
    pub fixed_daily_hours: Option<f64>,
}

/// POST /api/projection -- estimate when the mastery target is reached.
async fn create_projection(
    State(context): State<AppContext>,
    Json(request): Json<ProjectionRequest>,
) -> ApiResult<Json<Projection>> {
    let start = Instant::now();
    let result = context.tracker.projection(request.fixed_daily_hours, Utc::now());
    log_request_outcome("projection::create", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

pub fn router() -> Router<AppContext> {
    Router::new().route("/projection", post(create_projection))
}
