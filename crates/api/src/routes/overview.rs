//! Progress overview endpoint

use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use hourglass_domain::Overview;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::logging::log_request_outcome;

/// GET /api/overview -- level, readable total, observed pace.
async fn get_overview(State(context): State<AppContext>) -> ApiResult<Json<Overview>> {
    let start = Instant::now();
    let result = context.tracker.overview();
    log_request_outcome("overview::get", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

pub fn router() -> Router<AppContext> {
    Router::new().route("/overview", get(get_overview))
}
