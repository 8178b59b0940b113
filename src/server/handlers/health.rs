use axum::{Json, extract::State};
use serde::Serialize;

use crate::server::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub cache_entries: usize,
    pub uptime_seconds: u64,
}

/// Liveness plus a glance at the cache
pub async fn health_check(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cache_entries: state.cache().store().len(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
