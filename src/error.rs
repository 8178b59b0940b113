use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::model::League;

/// Errors surfaced by the data pipeline and the HTTP layer
#[derive(Debug, Error)]
pub enum PuckError {
    /// Network failure or non-2xx status from a provider, after retries
    #[error("Upstream fetch failed: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// Provider answered with a well-formed but empty data array
    #[error("Upstream returned no {resource} for {league}")]
    EmptyUpstreamPayload {
        league: League,
        resource: &'static str,
    },

    #[error("Failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid cache pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, PuckError>;

impl PuckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PuckError::InvalidRequest(_) | PuckError::InvalidPattern(_) => StatusCode::BAD_REQUEST,
            PuckError::UpstreamUnavailable(_)
            | PuckError::EmptyUpstreamPayload { .. }
            | PuckError::Decode(_)
            | PuckError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, client-facing description. Upstream details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            PuckError::UpstreamUnavailable(_) | PuckError::Decode(_) => {
                "Failed to fetch data from upstream provider".to_string()
            }
            PuckError::EmptyUpstreamPayload { league, resource } => {
                format!("No {resource} data available for {league}")
            }
            PuckError::InvalidRequest(msg) => msg.clone(),
            PuckError::InvalidPattern(_) => "Invalid cache pattern".to_string(),
            PuckError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl From<QueryRejection> for PuckError {
    fn from(rejection: QueryRejection) -> Self {
        PuckError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for PuckError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_maps_to_500() {
        let err = PuckError::EmptyUpstreamPayload {
            league: League::Chl,
            resource: "games",
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Upstream returned no games for chl");
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = PuckError::InvalidRequest("missing date".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "missing date");
    }

    #[test]
    fn query_rejection_becomes_invalid_request() {
        use axum::extract::Query;
        use std::collections::HashMap;

        let uri = "http://localhost/api/shl/games?limit=abc".parse().unwrap();
        let rejection = Query::<HashMap<String, u32>>::try_from_uri(&uri).unwrap_err();
        let err = PuckError::from(rejection);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(
            err.public_message()
                .starts_with("Failed to deserialize query string")
        );
    }

    #[test]
    fn decode_error_hides_details() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = PuckError::from(decode);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.public_message(),
            "Failed to fetch data from upstream provider"
        );
    }
}
