//! Benchmark harness crate for measuring tracking engine performance.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use hourglass_domain::{HourLog, Project};
use uuid::Uuid;

/// Build a log history spanning `days` consecutive days with `per_day`
/// entries each. Entry sizes cycle through a small range so distinct-day
/// grouping has real work to do.
pub fn build_log_history(days: u64, per_day: u32) -> Vec<HourLog> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid seed date");

    (0..days)
        .flat_map(|day| {
            let date = start + Days::new(day);
            (0..per_day).map(move |entry| HourLog { date, hours: 0.5 + f64::from(entry % 4) })
        })
        .collect()
}

/// Build a project whose deadline window brackets the given instant.
pub fn build_project(deadline: DateTime<Utc>) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: "benchmark project".to_string(),
        deadline,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid timestamp"),
        is_active: false,
    }
}
