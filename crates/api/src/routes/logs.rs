//! Hour logging endpoints

use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use hourglass_domain::HourLog;
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::logging::log_request_outcome;

/// Request body for logging practice hours.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    pub hours: f64,
}

/// POST /api/logs -- append an entry dated to the current UTC day.
async fn create_log(
    State(context): State<AppContext>,
    Json(request): Json<CreateLogRequest>,
) -> ApiResult<Json<HourLog>> {
    let start = Instant::now();
    let result = context.tracker.log_hours(request.hours, Utc::now()).await;
    log_request_outcome("logs::create", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

pub fn router() -> Router<AppContext> {
    Router::new().route("/logs", post(create_log))
}
