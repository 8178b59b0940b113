//! Upstream league providers.
//!
//! One [`LeagueProvider`] per league. Adapters only fetch and decode; turning
//! payloads into the domain model is the translators' job.

pub mod chl;
pub mod statnet;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::Url;

use crate::error::{PuckError, Result};
use crate::http_retry::{RetryConfig, fetch_json};
use crate::metrics;
use crate::model::League;
use crate::translate::LogoUrlTemplate;
use crate::wire::{GamesPayload, GoaliesPayload, PlayersPayload, StandingsPayload};

pub use chl::ChlProvider;
pub use statnet::StatnetProvider;

/// Source of provider-native payloads for one league
///
/// Every fetch either returns a non-empty payload or an error; empty data
/// arrays surface as [`PuckError::EmptyUpstreamPayload`].
#[async_trait]
pub trait LeagueProvider: Send + Sync {
    fn league(&self) -> League;

    /// Template used by the translators to build team logo URLs
    fn logo_template(&self) -> &LogoUrlTemplate;

    async fn fetch_games(&self) -> Result<GamesPayload>;

    async fn fetch_standings(&self) -> Result<StandingsPayload>;

    async fn fetch_players(&self) -> Result<PlayersPayload>;

    async fn fetch_goalies(&self) -> Result<GoaliesPayload>;
}

/// Shared HTTP plumbing for the adapters
#[derive(Clone, Debug)]
pub(crate) struct Upstream {
    pub league: League,
    pub base_url: String,
    pub client: Client,
    pub retry: RetryConfig,
}

impl Upstream {
    /// Absolute URL for `path` below the configured base, with `params` as query
    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse_with_params(&raw, params)
            .map_err(|e| PuckError::InternalError(format!("Invalid upstream URL {raw}: {e}")))
    }

    pub async fn get<T: DeserializeOwned>(&self, resource: &'static str, url: Url) -> Result<T> {
        info!("Fetching {} {} from {}", self.league, resource, url);
        fetch_json(&self.client, url.as_str(), &self.retry)
            .await
            .inspect_err(|e| {
                warn!("{} {} fetch failed: {}", self.league, resource, e);
                metrics::record_upstream_error(self.league.slug());
            })
    }

    /// Reject payloads without rows
    pub fn require_rows<T>(&self, resource: &'static str, payload: T, rows: usize) -> Result<T> {
        if rows == 0 {
            warn!("{} returned no {}", self.league, resource);
            metrics::record_upstream_error(self.league.slug());
            return Err(PuckError::EmptyUpstreamPayload {
                league: self.league,
                resource,
            });
        }
        Ok(payload)
    }
}
