//! Project deadline endpoints

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use hourglass_domain::{Project, ProjectCountdown, RemainingDuration};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::utils::logging::log_request_outcome;

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub deadline: DateTime<Utc>,
}

/// Request body for starting/stopping the project timer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub active: bool,
}

/// A project joined with its countdown, as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithCountdown {
    #[serde(flatten)]
    pub project: Project,
    pub countdown: CountdownView,
}

/// Display form of a countdown. The engine's percentage is unclamped;
/// this view caps it to 0-100.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownView {
    pub percent_elapsed: f64,
    pub is_past_deadline: bool,
    pub remaining: RemainingDuration,
}

impl From<ProjectCountdown> for CountdownView {
    fn from(countdown: ProjectCountdown) -> Self {
        Self {
            percent_elapsed: countdown.percent_elapsed.clamp(0.0, 100.0),
            is_past_deadline: countdown.is_past_deadline,
            remaining: countdown.remaining,
        }
    }
}

/// GET /api/projects -- all projects in creation order, with countdowns.
async fn list_projects(State(context): State<AppContext>) -> Json<Vec<ProjectWithCountdown>> {
    let start = Instant::now();
    let projects = context
        .tracker
        .list_projects(Utc::now())
        .into_iter()
        .map(|(project, countdown)| ProjectWithCountdown {
            project,
            countdown: countdown.into(),
        })
        .collect();
    log_request_outcome("projects::list", start.elapsed(), true);

    Json(projects)
}

/// POST /api/projects -- create a project with a stopped timer.
async fn create_project(
    State(context): State<AppContext>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let start = Instant::now();
    let now = Utc::now();
    let result = context.tracker.create_project(&request.name, request.deadline, now).await;
    log_request_outcome("projects::create", start.elapsed(), result.is_ok());

    Ok((StatusCode::CREATED, Json(result?)))
}

/// PATCH /api/projects/{id}/active -- start or stop the project timer.
async fn set_project_active(
    State(context): State<AppContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetActiveRequest>,
) -> ApiResult<Json<Project>> {
    let start = Instant::now();
    let result = context.tracker.set_project_active(id, request.active).await;
    log_request_outcome("projects::set_active", start.elapsed(), result.is_ok());

    Ok(Json(result?))
}

/// DELETE /api/projects/{id} -- remove a project.
async fn delete_project(
    State(context): State<AppContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let start = Instant::now();
    let result = context.tracker.delete_project(id).await;
    log_request_outcome("projects::delete", start.elapsed(), result.is_ok());

    result?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}/active", patch(set_project_active))
        .route("/projects/{id}", delete(delete_project))
}
