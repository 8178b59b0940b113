use axum::{Json, extract::State};
use tracing::info;

use crate::cache::inspect::{self, CacheCleared, CacheInspection};
use crate::server::state::AppState;

/// List every cache entry, expired ones included
pub async fn inspect_cache(State(state): State<AppState>) -> Json<CacheInspection> {
    Json(inspect::inspect(state.cache()))
}

/// Drop everything; the next read of each resource goes upstream
pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheCleared> {
    info!("Cache clear requested");
    Json(inspect::clear(state.cache()))
}
