//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Hourglass
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HourglassError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid pace: {0}")]
    InvalidPace(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Hourglass operations
pub type Result<T> = std::result::Result<T, HourglassError>;
