use std::time::Duration;

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine_baselines::{build_log_history, build_project};
use hourglass_core::{
    daily_average, deadline_countdown, level_of, project_completion, readable_time,
};

fn benchmark_progress_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_engines");
    group.sample_size(200);
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(5));

    // ---------------------------------------------------------------------
    // Level lookup across the whole threshold table
    // ---------------------------------------------------------------------
    group.bench_function("level_of_sweep", |b| {
        b.iter(|| {
            for total in [0.0, 99.0, 250.0, 999.0, 4_000.0, 9_999.0, 12_000.0] {
                let level = level_of(black_box(total)).expect("valid total");
                black_box(level);
            }
        });
    });

    // ---------------------------------------------------------------------
    // Readable decomposition touching every unit
    // ---------------------------------------------------------------------
    group.bench_function("readable_time_full_units", |b| {
        b.iter(|| {
            let text = readable_time(black_box(9_876.5));
            black_box(text);
        });
    });

    group.finish();
}

fn benchmark_pace_engines(c: &mut Criterion) {
    let year_of_logs = build_log_history(365, 3);
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("valid timestamp");

    let mut group = c.benchmark_group("pace_engines");
    group.sample_size(200);
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(5));

    // ---------------------------------------------------------------------
    // Daily average over a year of multi-entry days
    // ---------------------------------------------------------------------
    group.bench_function("daily_average_year_of_logs", |b| {
        b.iter(|| {
            let average = daily_average(black_box(&year_of_logs));
            black_box(average);
        });
    });

    // ---------------------------------------------------------------------
    // Completion projection from the observed pace
    // ---------------------------------------------------------------------
    let average = daily_average(&year_of_logs);
    group.bench_function("project_completion_observed_pace", |b| {
        b.iter(|| {
            let projection = project_completion(black_box(2_000.0), black_box(average), None, now)
                .expect("positive pace");
            black_box(projection);
        });
    });

    group.finish();
}

fn benchmark_countdown_engine(c: &mut Criterion) {
    let deadline = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).single().expect("valid timestamp");
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 30, 45).single().expect("valid timestamp");
    let project = build_project(deadline);

    let mut group = c.benchmark_group("countdown_engine");
    group.sample_size(200);
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("deadline_countdown_mid_window", |b| {
        b.iter(|| {
            let countdown = deadline_countdown(black_box(&project), black_box(now));
            black_box(countdown);
        });
    });

    group.finish();
}

criterion_group!(
    engines,
    benchmark_progress_engines,
    benchmark_pace_engines,
    benchmark_countdown_engine
);
criterion_main!(engines);
