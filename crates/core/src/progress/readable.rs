//! Human-readable time spans

use hourglass_domain::constants::{HOURS_PER_DAY, HOURS_PER_MONTH, HOURS_PER_YEAR};

/// Flatten an hour total into a span like `"1 year, 2 months, 5 days"`.
///
/// Units are floored in descending order using 365-day years and 30-day
/// months, zero components are omitted, and values above one pluralize.
///
/// The two zero cases stay distinct on purpose: totals at or below zero
/// (and non-finite totals) read `"0 days"`, while positive totals too small
/// to fill a single hour read `"0 hours"`.
#[must_use]
pub fn readable_time(hours: f64) -> String {
    if hours <= 0.0 || !hours.is_finite() {
        return "0 days".to_string();
    }

    let years = (hours / HOURS_PER_YEAR).floor();
    let mut remainder = hours % HOURS_PER_YEAR;
    let months = (remainder / HOURS_PER_MONTH).floor();
    remainder %= HOURS_PER_MONTH;
    let days = (remainder / HOURS_PER_DAY).floor();
    let leftover_hours = (remainder % HOURS_PER_DAY).floor();

    let mut parts: Vec<String> = Vec::with_capacity(4);
    push_unit(&mut parts, years, "year");
    push_unit(&mut parts, months, "month");
    push_unit(&mut parts, days, "day");
    push_unit(&mut parts, leftover_hours, "hour");

    if parts.is_empty() {
        return "0 hours".to_string();
    }

    parts.join(", ")
}

fn push_unit(parts: &mut Vec<String>, value: f64, unit: &str) {
    if value < 1.0 {
        return;
    }

    let count = value as u64;
    let plural = if count > 1 { "s" } else { "" };
    parts.push(format!("{count} {unit}{plural}"));
}
