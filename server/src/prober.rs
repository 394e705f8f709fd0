//! URL prober
//!
//! Sends exactly one GET to a submitted URL and reduces the outcome to a
//! `ProbeStatus`. Failures never propagate: every way the exchange can fail
//! collapses into `ProbeStatus::Unreachable`.

use async_trait::async_trait;
use pingboard_common::{
    error::{PingError, PingResult},
    types::ProbeStatus,
};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Something that can check a URL.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe `url` once. Never fails; unreachable targets yield the marker.
    async fn probe(&self, url: &str) -> ProbeStatus;
}

/// reqwest-backed prober
///
/// Redirects follow reqwest's default policy. No retries.
#[derive(Clone, Debug)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Create a prober whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> PingResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pingboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PingError::Internal(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeStatus {
        let started = Instant::now();
        match self.client.get(url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!(
                    url = %url,
                    status = code,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Probe completed"
                );
                ProbeStatus::Code(code)
            }
            Err(e) => {
                warn!(
                    url = %url,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    error = %e,
                    "Probe failed"
                );
                ProbeStatus::Unreachable
            }
        }
    }
}
