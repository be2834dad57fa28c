//! Application configuration structures
//!
//! Deserialized from config files or assembled from environment variables by
//! the infrastructure loader. Every section has defaults, so a bare
//! `TrackerConfig::default()` is a runnable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MAX_DAILY_HOURS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STORE_FILE,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON document file.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Engine tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound for a single manual entry, in hours.
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    /// Fixed practice pace assumed by projections when no override is given.
    #[serde(default)]
    pub fixed_daily_hours: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_daily_hours: default_max_daily_hours(), fixed_daily_hours: None }
    }
}

fn default_store_path() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

const fn default_max_daily_hours() -> f64 {
    DEFAULT_MAX_DAILY_HOURS
}
