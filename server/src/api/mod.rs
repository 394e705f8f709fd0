//! REST APIハンドラー
//!
//! Ping history API and the embedded dashboard.

pub mod dashboard;
pub mod error;
pub mod pings;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/pings", get(pings::list_pings).post(pings::create_ping))
        .with_state(state)
}

/// API + dashboard + request tracing
pub fn create_app(state: AppState) -> Router {
    create_router(state)
        .route("/", get(dashboard::index))
        .fallback(dashboard::static_or_not_found)
        .layer(TraceLayer::new_for_http())
}
