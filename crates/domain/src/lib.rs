//! # Hourglass Domain
//!
//! Business domain types and models for Hourglass.
//!
//! This crate contains:
//! - Persisted document types (`HourLog`, `Project`, `TrackerDocument`)
//! - Engine result types (`LevelInfo`, `Projection`, `ProjectCountdown`)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (level ladder, mastery target)
//!
//! ## Architecture
//! - No dependencies on other Hourglass crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
