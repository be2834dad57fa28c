//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hourglass_domain::HourglassError;
use serde_json::json;

use crate::utils::logging::error_label;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`HourglassError`] and implements [`IntoResponse`] to produce
/// consistent JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from the core or infra layers.
    #[error(transparent)]
    Domain(#[from] HourglassError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Domain(domain) => {
                let status = match domain {
                    HourglassError::InvalidInput(_) | HourglassError::InvalidPace(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    HourglassError::NotFound(_) => StatusCode::NOT_FOUND,
                    HourglassError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    HourglassError::StoreWrite(_)
                    | HourglassError::Config(_)
                    | HourglassError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };

                if status.is_server_error() {
                    tracing::error!(error = %domain, "Domain error surfaced to client");
                }

                (status, error_label(domain), domain.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
