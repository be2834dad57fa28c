//! Mastery completion projection

use chrono::{DateTime, Duration, Utc};
use hourglass_domain::constants::MASTERY_TARGET_HOURS;
use hourglass_domain::{HourglassError, Projection, Result};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Project when the mastery target will be reached.
///
/// Totals already at or past the target complete immediately: the projection
/// reports `now` with zero remaining days before any pace is examined.
///
/// A fixed pace, when given, always takes precedence over the observed
/// average. A fixed pace at or below zero is rejected outright, even when
/// the average alone could carry the projection.
///
/// The end date is offset by the fractional day count at millisecond
/// resolution; `remaining_days` is that count rounded up.
///
/// # Errors
/// Returns [`HourglassError::InvalidPace`] when the effective pace is zero
/// or negative, and [`HourglassError::InvalidInput`] for non-finite inputs.
pub fn project_completion(
    total_hours: f64,
    daily_average: f64,
    fixed_daily_hours: Option<f64>,
    now: DateTime<Utc>,
) -> Result<Projection> {
    if !total_hours.is_finite() || !daily_average.is_finite() {
        return Err(HourglassError::InvalidInput(
            "projection inputs must be finite".to_string(),
        ));
    }
    if let Some(fixed) = fixed_daily_hours {
        if !fixed.is_finite() {
            return Err(HourglassError::InvalidInput(
                "fixed daily hours must be finite".to_string(),
            ));
        }
    }

    // Already there. No pace needed, even an invalid one.
    if total_hours >= MASTERY_TARGET_HOURS {
        return Ok(Projection { estimated_end_date: now, remaining_days: 0 });
    }

    let pace = match fixed_daily_hours {
        Some(fixed) if fixed > 0.0 => fixed,
        Some(fixed) => {
            return Err(HourglassError::InvalidPace(format!(
                "fixed daily hours must be positive, got {fixed}"
            )));
        }
        None if daily_average > 0.0 => daily_average,
        None => {
            return Err(HourglassError::InvalidPace(
                "cannot project with zero or negative daily hours".to_string(),
            ));
        }
    };

    let remaining_days = (MASTERY_TARGET_HOURS - total_hours) / pace;
    let offset = Duration::milliseconds((remaining_days * MILLIS_PER_DAY).round() as i64);

    Ok(Projection {
        estimated_end_date: now + offset,
        remaining_days: remaining_days.ceil() as i64,
    })
}
