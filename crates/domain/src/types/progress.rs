//! Engine result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a running hour total sits on the level ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    /// One-based level number.
    pub level: u32,
    pub title: String,
    /// Inclusive lower bound of the current level, in hours.
    pub current_threshold: f64,
    /// Lower bound of the next level. `None` at the mastery tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_threshold: Option<f64>,
    /// Progress through the current level, 0 to 100.
    pub progress_percent: f64,
}

/// Estimated completion of the mastery target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub estimated_end_date: DateTime<Utc>,
    /// Whole days left, rounded up from the fractional estimate.
    pub remaining_days: i64,
}

/// Countdown state for one project deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCountdown {
    /// Share of the project window already elapsed. Unclamped; display
    /// layers cap it to 0-100.
    pub percent_elapsed: f64,
    pub is_past_deadline: bool,
    pub remaining: RemainingDuration,
}

/// Time left until a deadline, split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Aggregate snapshot of overall progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_hours: f64,
    pub level: LevelInfo,
    /// Total practice time as a human-readable span.
    pub readable_total: String,
    pub daily_average: f64,
    pub log_count: usize,
    pub distinct_days: usize,
}
