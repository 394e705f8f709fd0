//! Pingboard server
//!
//! Probes submitted URLs once, keeps the outcomes in a JSON history file and
//! serves that history to a small polling dashboard.

#![warn(missing_docs)]

/// REST APIハンドラーと静的UI
pub mod api;

/// コマンドライン引数
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// Outbound URL probing
pub mod prober;

/// Shutdown signal handling
pub mod shutdown;

/// Ping history storage
pub mod store;

pub use pingboard_common as common;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// Ping history backend
    pub store: Arc<dyn store::PingStore>,
    /// Probe implementation used by `POST /api/pings`
    pub prober: Arc<dyn prober::Prober>,
}

impl AppState {
    /// Build state from concrete store and prober.
    pub fn new(store: impl store::PingStore + 'static, prober: impl prober::Prober + 'static) -> Self {
        Self {
            store: Arc::new(store),
            prober: Arc::new(prober),
        }
    }
}
