//! Structured logging helpers

use std::time::Duration;

use hourglass_domain::HourglassError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG` for the filter, defaulting to `info` for this crate and
/// the tower-http middleware.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hourglass=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Log the outcome of a handled request with structured fields.
///
/// # Parameters
/// * `route` - Logical route identifier (e.g. `"logs::create"`).
/// * `elapsed` - Duration the handler took.
/// * `success` - Whether the handler completed successfully.
///
/// The helper keeps the handlers concise and the log fields consistent.
/// Callers must avoid forwarding sensitive values in `route`.
#[inline]
pub fn log_request_outcome(route: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(route, duration_ms, "request_success");
    } else {
        warn!(route, duration_ms, "request_failure");
    }
}

/// Convert a `HourglassError` into a stable label suitable for logging and
/// error bodies.
#[inline]
pub fn error_label(error: &HourglassError) -> &'static str {
    match error {
        HourglassError::InvalidInput(_) => "invalid_input",
        HourglassError::InvalidPace(_) => "invalid_pace",
        HourglassError::StoreUnavailable(_) => "store_unavailable",
        HourglassError::StoreWrite(_) => "store_write",
        HourglassError::NotFound(_) => "not_found",
        HourglassError::Config(_) => "config",
        HourglassError::Internal(_) => "internal",
    }
}
