//! Practice pace estimation

use std::collections::HashSet;

use hourglass_domain::HourLog;

/// Average hours practiced per active day.
///
/// The denominator counts distinct calendar dates, so several entries on one
/// day still count as a single day of practice. Returns `0.0` when no
/// entries exist.
#[must_use]
pub fn daily_average(logs: &[HourLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }

    let total: f64 = logs.iter().map(|log| log.hours).sum();
    total / distinct_days(logs) as f64
}

/// Number of distinct calendar dates present in the log.
#[must_use]
pub fn distinct_days(logs: &[HourLog]) -> usize {
    logs.iter().map(|log| log.date).collect::<HashSet<_>>().len()
}
