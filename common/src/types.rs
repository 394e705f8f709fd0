//! Core data types
//!
//! `PingRecord` is the only persisted entity. Its `status` is either the HTTP
//! status code returned by the probed URL or the `"ERROR"` marker when the
//! exchange never completed.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value recorded when a probe could not complete.
pub const ERROR_MARKER: &str = "ERROR";

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStatus", into = "RawStatus")]
pub enum ProbeStatus {
    /// The exchange completed with this HTTP status code.
    Code(u16),
    /// DNS failure, refused connection, timeout, malformed URL...
    Unreachable,
}

impl ProbeStatus {
    /// Status code of a completed exchange, if any.
    pub fn code(&self) -> Option<u16> {
        match self {
            ProbeStatus::Code(code) => Some(*code),
            ProbeStatus::Unreachable => None,
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Code(code) => write!(f, "{code}"),
            ProbeStatus::Unreachable => f.write_str(ERROR_MARKER),
        }
    }
}

/// JSON shape of `ProbeStatus`: a bare number or the marker string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Code(u16),
    Marker(String),
}

impl TryFrom<RawStatus> for ProbeStatus {
    type Error = String;

    fn try_from(raw: RawStatus) -> Result<Self, String> {
        match raw {
            RawStatus::Code(0) => Err("status code must be a positive integer".to_string()),
            RawStatus::Code(code) => Ok(ProbeStatus::Code(code)),
            RawStatus::Marker(marker) if marker == ERROR_MARKER => Ok(ProbeStatus::Unreachable),
            RawStatus::Marker(other) => Err(format!(
                "unknown status marker {other:?}, expected a status code or {ERROR_MARKER:?}"
            )),
        }
    }
}

impl From<ProbeStatus> for RawStatus {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Code(code) => RawStatus::Code(code),
            ProbeStatus::Unreachable => RawStatus::Marker(ERROR_MARKER.to_string()),
        }
    }
}

/// One logged probe of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingRecord {
    /// Target address, exactly as submitted
    pub url: String,
    /// Status code or error marker
    pub status: ProbeStatus,
    /// When the check was performed (server clock)
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl PingRecord {
    /// Create a record stamped with the current time.
    pub fn new(url: impl Into<String>, status: ProbeStatus) -> Self {
        Self::with_timestamp(url, status, Utc::now())
    }

    /// Create a record with an explicit timestamp.
    ///
    /// The timestamp is truncated to milliseconds, the precision of the
    /// persisted format.
    pub fn with_timestamp(
        url: impl Into<String>,
        status: ProbeStatus,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.into(),
            status,
            timestamp: timestamp.trunc_subsecs(3),
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
