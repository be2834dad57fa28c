//! Project deadline countdowns

use chrono::{DateTime, Utc};
use hourglass_domain::{Project, ProjectCountdown, RemainingDuration};

/// Countdown state for one project at a given instant.
///
/// The elapsed percentage is left unclamped so callers can distinguish
/// "not started yet" (negative) and "overran" (above 100); display layers
/// cap it to 0-100. A window with zero or negative span (deadline at or
/// before creation) is fully elapsed no matter what the clock says.
#[must_use]
pub fn deadline_countdown(project: &Project, now: DateTime<Utc>) -> ProjectCountdown {
    let total_span = (project.deadline - project.created_at).num_seconds();
    let elapsed = (now - project.created_at).num_seconds();

    let percent_elapsed = if total_span <= 0 {
        100.0
    } else {
        elapsed as f64 / total_span as f64 * 100.0
    };

    let is_past_deadline = now > project.deadline;

    // Remaining time counts from now, frozen at zero once the deadline is
    // behind us.
    let reference = if now < project.deadline { now } else { project.deadline };
    let left = project.deadline - reference;

    let remaining = RemainingDuration {
        days: left.num_days(),
        hours: left.num_hours() % 24,
        minutes: left.num_minutes() % 60,
        seconds: left.num_seconds() % 60,
    };

    ProjectCountdown { percent_elapsed, is_past_deadline, remaining }
}
