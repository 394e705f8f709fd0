//! Wire protocol
//!
//! Request payloads for `/api/pings`. Responses reuse `PingRecord` directly.

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// POST /api/pings request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePingRequest {
    /// URL to probe. Optional at the serde level so that a missing field is
    /// reported as a validation error rather than a parse failure.
    #[serde(default)]
    pub url: Option<String>,
}

impl CreatePingRequest {
    /// Request for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Return the URL to probe, exactly as submitted.
    ///
    /// Fails when the field is absent or empty. Anything else, whitespace
    /// included, is left for the prober to judge.
    pub fn validated_url(&self) -> Result<&str, CommonError> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            Some(_) => Err(CommonError::Validation("url must not be empty".to_string())),
            None => Err(CommonError::Validation("url is required".to_string())),
        }
    }
}
