use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pingboard::common::types::ProbeStatus;
use pingboard::prober::Prober;
use pingboard::store::{JsonFileStore, MemoryStore, PingStore};
use pingboard::{api, AppState};

use super::http::{spawn_router, TestServer};

/// Prober that answers with a fixed status and remembers what it was asked
#[allow(dead_code)]
pub struct StubProber {
    status: ProbeStatus,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubProber {
    pub fn returning(status: ProbeStatus) -> Arc<Self> {
        Arc::new(Self {
            status,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for StubProber {
    async fn probe(&self, url: &str) -> ProbeStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.status
    }
}

/// Start the full app (API + dashboard) over real HTTP
#[allow(dead_code)]
pub async fn spawn_pingboard(store: Arc<dyn PingStore>, prober: Arc<dyn Prober>) -> TestServer {
    let app = api::create_app(AppState { store, prober });
    spawn_router(app).await
}

/// Full app with an in-memory store
#[allow(dead_code)]
pub async fn spawn_in_memory(prober: Arc<dyn Prober>) -> TestServer {
    spawn_pingboard(Arc::new(MemoryStore::new()), prober).await
}

/// Full app persisting to `path`
#[allow(dead_code)]
pub async fn spawn_with_file(path: &Path, prober: Arc<dyn Prober>) -> TestServer {
    spawn_pingboard(Arc::new(JsonFileStore::new(path)), prober).await
}
