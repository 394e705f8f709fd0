//! Ping history storage
//!
//! The history is a JSON array of `PingRecord`, newest first. Every call reads
//! or rewrites the whole document; there is no index and no retention limit.
//!
//! `JsonFileStore` serializes its own read-modify-write cycles with a mutex,
//! so concurrent requests in one process never drop each other's records.
//! Several processes sharing one file are not coordinated: the last writer
//! wins.

use async_trait::async_trait;
use pingboard_common::{
    error::{PingError, PingResult},
    types::PingRecord,
};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Persistent list of ping records.
#[async_trait]
pub trait PingStore: Send + Sync {
    /// Full history, newest first. Empty when nothing has been stored yet.
    async fn list(&self) -> PingResult<Vec<PingRecord>>;

    /// Prepend `record` to the history and persist it.
    async fn append(&self, record: PingRecord) -> PingResult<()>;
}

/// History kept in a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `path`. The file and its parent directory are created
    /// on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> PingResult<Vec<PingRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PingError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            PingError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, records: &[PingRecord]) -> PingResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PingError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let body = serde_json::to_vec_pretty(records).map_err(|e| {
            PingError::Storage(format!("Failed to encode ping history: {}", e))
        })?;
        replace_file(&self.path, &body).await
    }
}

/// Sibling temp path: `pings.json` -> `pings.json.tmp`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `body` next to `path`, then rename over it. The temp file is
/// removed if the rename fails.
async fn replace_file(path: &Path, body: &[u8]) -> PingResult<()> {
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, body).await.map_err(|e| {
        PingError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
    })?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
        }
        return Err(PingError::Storage(format!(
            "Failed to replace {}: {}",
            path.display(),
            e
        )));
    }
    Ok(())
}

#[async_trait]
impl PingStore for JsonFileStore {
    async fn list(&self) -> PingResult<Vec<PingRecord>> {
        self.load().await
    }

    async fn append(&self, record: PingRecord) -> PingResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        records.insert(0, record);
        self.save(&records).await?;
        debug!(
            path = %self.path.display(),
            total = records.len(),
            "Ping history saved"
        );
        Ok(())
    }
}

/// History kept in process memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<PingRecord>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `records` (newest first).
    pub fn with_records(records: Vec<PingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl PingStore for MemoryStore {
    async fn list(&self) -> PingResult<Vec<PingRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn append(&self, record: PingRecord) -> PingResult<()> {
        self.records.write().await.insert(0, record);
        Ok(())
    }
}
