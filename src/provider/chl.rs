use async_trait::async_trait;
use reqwest::Client;

use super::{LeagueProvider, Upstream};
use crate::config::ChlConfig;
use crate::error::Result;
use crate::http_retry::RetryConfig;
use crate::model::League;
use crate::translate::LogoUrlTemplate;
use crate::wire::chl::{GameList, GoalieList, SkaterList, StandingsList};
use crate::wire::{GamesPayload, GoaliesPayload, PlayersPayload, StandingsPayload};

/// CHL adapter
#[derive(Clone, Debug)]
pub struct ChlProvider {
    upstream: Upstream,
    season_id: String,
    logos: LogoUrlTemplate,
}

impl ChlProvider {
    pub fn new(
        config: &ChlConfig,
        logos: LogoUrlTemplate,
        client: Client,
        retry: RetryConfig,
    ) -> Self {
        Self {
            upstream: Upstream {
                league: League::Chl,
                base_url: config.api_url.clone(),
                client,
                retry,
            },
            season_id: config.season_id.clone(),
            logos,
        }
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<T> {
        let url = self
            .upstream
            .url(path, &[("seasonId", self.season_id.as_str())])?;
        self.upstream.get(resource, url).await
    }
}

#[async_trait]
impl LeagueProvider for ChlProvider {
    fn league(&self) -> League {
        League::Chl
    }

    fn logo_template(&self) -> &LogoUrlTemplate {
        &self.logos
    }

    async fn fetch_games(&self) -> Result<GamesPayload> {
        let list: GameList = self.list("games", "/v1/games").await?;
        let rows = list.data.len();
        self.upstream
            .require_rows("games", GamesPayload::Chl(list), rows)
    }

    async fn fetch_standings(&self) -> Result<StandingsPayload> {
        let list: StandingsList = self.list("standings", "/v1/standings").await?;
        let rows = list.data.len();
        self.upstream
            .require_rows("standings", StandingsPayload::Chl(list), rows)
    }

    async fn fetch_players(&self) -> Result<PlayersPayload> {
        let list: SkaterList = self.list("players", "/v1/stats/skaters").await?;
        let rows = list.data.len();
        self.upstream
            .require_rows("players", PlayersPayload::Chl(list), rows)
    }

    async fn fetch_goalies(&self) -> Result<GoaliesPayload> {
        let list: GoalieList = self.list("goalies", "/v1/stats/goalies").await?;
        let rows = list.data.len();
        self.upstream
            .require_rows("goalies", GoaliesPayload::Chl(list), rows)
    }
}
