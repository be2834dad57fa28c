//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Mastery target (the ten-thousand-hour rule)
pub const MASTERY_TARGET_HOURS: f64 = 10_000.0;

// Calendar approximations used when flattening an hour total into a
// human-readable span (365-day years, 30-day months)
pub const HOURS_PER_DAY: f64 = 24.0;
pub const HOURS_PER_MONTH: f64 = 30.0 * HOURS_PER_DAY;
pub const HOURS_PER_YEAR: f64 = 365.0 * HOURS_PER_DAY;

// Logging constraints
pub const DEFAULT_MAX_DAILY_HOURS: f64 = 16.0;

// Store and export defaults
pub const DEFAULT_STORE_FILE: &str = "hourglass.json";
pub const EXPORT_FILE_PREFIX: &str = "hourglass-backup";

// Server defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7399";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Level ladder over total practiced hours.
///
/// Each entry is the inclusive lower threshold for that level. The final
/// entry is the mastery tier; totals at or beyond it stay there.
pub const LEVELS: [(f64, &str); 10] = [
    (0.0, "Novice"),
    (100.0, "Beginner"),
    (250.0, "Apprentice"),
    (500.0, "Practitioner"),
    (1000.0, "Adept"),
    (2000.0, "Skilled"),
    (4000.0, "Professional"),
    (6000.0, "Expert"),
    (8000.0, "Veteran"),
    (MASTERY_TARGET_HOURS, "Master"),
];
