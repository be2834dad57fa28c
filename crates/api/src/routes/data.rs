//! Backup and restore endpoints

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use hourglass_domain::{ExportSnapshot, TrackerDocument};

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::logging::log_request_outcome;

/// GET /api/export -- the full document plus a dated backup file name.
async fn export_document(State(context): State<AppContext>) -> Json<ExportSnapshot> {
    let start = Instant::now();
    let snapshot = context.tracker.export(Utc::now());
    log_request_outcome("data::export", start.elapsed(), true);

    Json(snapshot)
}

/// POST /api/import -- replace the tracked state with an uploaded document.
async fn import_document(
    State(context): State<AppContext>,
    Json(document): Json<TrackerDocument>,
) -> ApiResult<StatusCode> {
    let start = Instant::now();
    let result = context.tracker.import(document).await;
    log_request_outcome("data::import", start.elapsed(), result.is_ok());

    result?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/reset -- wipe all logs, projects, and accumulated hours.
async fn reset_document(State(context): State<AppContext>) -> ApiResult<StatusCode> {
    let start = Instant::now();
    let result = context.tracker.reset().await;
    log_request_outcome("data::reset", start.elapsed(), result.is_ok());

    result?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/export", get(export_document))
        .route("/import", post(import_document))
        .route("/reset", post(reset_document))
}
