//! Configuration management via environment variables
//!
//! Helpers for reading environment variables with a fallback name, plus the
//! logging settings that are only ever read from the environment.

use std::path::PathBuf;

/// Get an environment variable with fallback to a secondary name
///
/// If `primary` is set, returns its value. Otherwise returns the value of
/// `fallback`, if set.
///
/// # Example
/// ```
/// use pingboard::config::get_env_with_fallback;
///
/// let level = get_env_with_fallback("PINGBOARD_LOG_LEVEL", "RUST_LOG");
/// ```
pub fn get_env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    if let Ok(val) = std::env::var(primary) {
        return Some(val);
    }
    std::env::var(fallback).ok()
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(primary: &str, fallback: &str, default: &str) -> String {
    get_env_with_fallback(primary, fallback).unwrap_or_else(|| default.to_string())
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `pingboard=debug,tower_http=info`
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when `None`
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    /// Read `PINGBOARD_LOG_LEVEL` (fallback `RUST_LOG`, default `info`) and
    /// `PINGBOARD_LOG_DIR`.
    pub fn from_env() -> Self {
        let level = get_env_with_fallback_or("PINGBOARD_LOG_LEVEL", "RUST_LOG", "info");
        let dir = std::env::var("PINGBOARD_LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        Self { level, dir }
    }
}
