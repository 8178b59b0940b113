use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::server::state::AppState;

/// Prometheus text exposition
pub async fn render(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
        .into_response()
}
