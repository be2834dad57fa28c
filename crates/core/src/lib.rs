//! # Hourglass Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The progress engines (level ladder, readable time spans)
//! - Pace estimation and mastery completion projection
//! - Project deadline countdowns
//! - Port/adapter interfaces (traits)
//! - The tracker service orchestrating document mutations
//!
//! ## Architecture Principles
//! - Only depends on `hourglass-domain`
//! - No file, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod countdown;
pub mod pace;
pub mod progress;
pub mod projection;
pub mod tracker;

// Re-export specific items to avoid ambiguity
pub use countdown::deadline_countdown;
pub use pace::{daily_average, distinct_days};
pub use progress::{level_of, readable_time};
pub use projection::project_completion;
pub use tracker::ports::DocumentStore;
pub use tracker::TrackerService;
