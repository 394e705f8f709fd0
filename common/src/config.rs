//! Server configuration
//!
//! `ServerConfig` with serde defaults. The CLI layer fills it from flags and
//! environment variables; the defaults below apply when nothing is given.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CommonError;

/// Pingboard server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Persistence file (default: "data/pings.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Outbound probe timeout in seconds (default: 5)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Keep history in memory only (default: false)
    #[serde(default)]
    pub in_memory: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("pings.json")
}

fn default_probe_timeout() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            probe_timeout_secs: default_probe_timeout(),
            in_memory: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` string passed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Check values that serde cannot constrain.
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.probe_timeout_secs == 0 {
            return Err(CommonError::Config(
                "probe timeout must be at least 1 second".to_string(),
            ));
        }
        if !self.in_memory && self.data_file.as_os_str().is_empty() {
            return Err(CommonError::Config("data file path is empty".to_string()));
        }
        Ok(())
    }
}
