//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Without any source, falls back to built-in defaults
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `HOURGLASS_STORE_PATH`: Document file path (required for env loading)
//! - `HOURGLASS_BIND_ADDR`: HTTP bind address
//! - `HOURGLASS_REQUEST_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `HOURGLASS_MAX_DAILY_HOURS`: Cap for a single manual entry
//! - `HOURGLASS_FIXED_DAILY_HOURS`: Fixed projection pace
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./hourglass.config.json` or `./hourglass.config.toml`
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use hourglass_domain::{HourglassError, Result, TrackerConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the environment is
/// incomplete, falls back to a config file; without one, built-in defaults
/// apply.
///
/// # Errors
/// Returns `HourglassError::Config` if a config file exists but cannot be
/// parsed.
pub fn load() -> Result<TrackerConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Incomplete environment configuration, trying file");
        }
    }

    if let Some(path) = probe_config_paths() {
        return load_from_file(Some(path));
    }

    tracing::info!("No configuration found, using defaults");
    Ok(TrackerConfig::default())
}

/// Load configuration from environment variables
///
/// `HOURGLASS_STORE_PATH` must be present; the remaining variables override
/// their defaults individually.
///
/// # Errors
/// Returns `HourglassError::Config` if the store path is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<TrackerConfig> {
    let store_path = env_var("HOURGLASS_STORE_PATH")?;

    let mut config = TrackerConfig::default();
    config.store.path = store_path;

    if let Ok(addr) = std::env::var("HOURGLASS_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    if let Some(timeout) = env_parse::<u64>("HOURGLASS_REQUEST_TIMEOUT_SECS")? {
        config.server.request_timeout_secs = timeout;
    }
    if let Some(cap) = env_parse::<f64>("HOURGLASS_MAX_DAILY_HOURS")? {
        config.engine.max_daily_hours = cap;
    }
    if let Some(fixed) = env_parse::<f64>("HOURGLASS_FIXED_DAILY_HOURS")? {
        config.engine.fixed_daily_hours = Some(fixed);
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HourglassError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<TrackerConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HourglassError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HourglassError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HourglassError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<TrackerConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HourglassError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HourglassError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(HourglassError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, up to two parent levels, and the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("hourglass.config.json"),
            cwd.join("hourglass.config.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("hourglass.config.json"),
                exe_dir.join("hourglass.config.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        HourglassError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable
///
/// Absent variables are `Ok(None)`; present but malformed values are
/// `Config` errors.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| HourglassError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}
