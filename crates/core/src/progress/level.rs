//! Level ladder lookup

use hourglass_domain::constants::LEVELS;
use hourglass_domain::{HourglassError, LevelInfo, Result};

/// Resolve where a running hour total sits on the level ladder.
///
/// The ladder partitions `[0, ∞)`: every total maps to exactly one level,
/// and totals at or beyond the mastery threshold report the terminal level
/// with no next threshold and a full progress bar.
///
/// # Errors
/// Returns [`HourglassError::InvalidInput`] for negative or non-finite
/// totals.
pub fn level_of(total_hours: f64) -> Result<LevelInfo> {
    if !total_hours.is_finite() {
        return Err(HourglassError::InvalidInput(format!(
            "total hours must be finite, got {total_hours}"
        )));
    }
    if total_hours < 0.0 {
        return Err(HourglassError::InvalidInput(format!(
            "total hours cannot be negative, got {total_hours}"
        )));
    }

    // Highest threshold at or below the total wins. Threshold 0 always
    // matches, so the search cannot come up empty.
    let index = LEVELS
        .iter()
        .rposition(|(threshold, _)| total_hours >= *threshold)
        .unwrap_or(0);

    let (current_threshold, title) = LEVELS[index];
    let next_threshold = LEVELS.get(index + 1).map(|(threshold, _)| *threshold);

    let progress_percent = next_threshold.map_or(100.0, |next| {
        (total_hours - current_threshold) / (next - current_threshold) * 100.0
    });

    Ok(LevelInfo {
        level: index as u32 + 1,
        title: title.to_string(),
        current_threshold,
        next_threshold,
        progress_percent,
    })
}
