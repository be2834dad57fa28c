//! # Hourglass Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The JSON file document store (atomic whole-file replace)
//! - Configuration loading (environment variables, config files)
//!
//! ## Architecture
//! - Implements traits defined in `hourglass-core`
//! - Depends on `hourglass-domain` and `hourglass-core`
//! - Contains all "impure" code (file I/O, environment)

pub mod config;
pub mod store;

// Re-export commonly used items
pub use store::JsonFileStore;
