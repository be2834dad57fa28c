//! Domain types and models
//!
//! Persisted types keep the camelCase field names of the original web
//! client, so documents exported there load here unchanged.

pub mod document;
pub mod log;
pub mod progress;
pub mod project;

// Re-export all types for convenience
pub use document::{ExportSnapshot, TrackerDocument};
pub use log::HourLog;
pub use progress::{LevelInfo, Overview, ProjectCountdown, Projection, RemainingDuration};
pub use project::Project;
