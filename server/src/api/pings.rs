//! Ping APIハンドラー
//!
//! `POST /api/pings` probes a URL and records the outcome,
//! `GET /api/pings` returns the history newest first.

use super::error::AppError;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use pingboard_common::{protocol::CreatePingRequest, types::PingRecord};
use tracing::{info, warn};

/// POST /api/pings - probe a URL and record the result
///
/// A failed probe is still a successful request: the record carries the
/// error marker. Only a missing/empty URL (400) or a storage failure (500)
/// fail the request, and neither leaves a record behind.
pub async fn create_ping(
    State(state): State<AppState>,
    payload: Result<Json<CreatePingRequest>, JsonRejection>,
) -> Result<Json<PingRecord>, AppError> {
    let Json(req) = payload?;
    let url = req.validated_url()?;

    let status = state.prober.probe(url).await;
    let record = PingRecord::new(url, status);
    state.store.append(record.clone()).await?;

    match record.status.code() {
        Some(code) => info!(url = %record.url, status = code, "Ping recorded"),
        None => warn!(url = %record.url, status = %record.status, "Ping recorded, target unreachable"),
    }
    Ok(Json(record))
}

/// GET /api/pings - full history, newest first
pub async fn list_pings(State(state): State<AppState>) -> Result<Json<Vec<PingRecord>>, AppError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}
