use async_trait::async_trait;
use reqwest::Client;

use super::{LeagueProvider, Upstream};
use crate::config::StatnetConfig;
use crate::error::Result;
use crate::http_retry::RetryConfig;
use crate::model::League;
use crate::translate::LogoUrlTemplate;
use crate::wire::statnet::{GameSchedule, GoalkeeperTable, SkaterTable, StandingsTable};
use crate::wire::{GamesPayload, GoaliesPayload, PlayersPayload, StandingsPayload};

const SCHEDULE_PATH: &str = "/sports-v2/game-schedule";
const STANDINGS_PATH: &str = "/sports-v2/league-standings";
const ATHLETE_STATS_PATH: &str = "/sports-v2/athlete-stats";

/// Statnet adapter. SHL and SDHL are separate deployments of the same API,
/// distinguished only by base URL and season identifiers.
#[derive(Clone, Debug)]
pub struct StatnetProvider {
    upstream: Upstream,
    season_uuid: String,
    series_uuid: String,
    game_type_uuid: String,
    logos: LogoUrlTemplate,
}

impl StatnetProvider {
    pub fn new(
        league: League,
        config: &StatnetConfig,
        logos: LogoUrlTemplate,
        client: Client,
        retry: RetryConfig,
    ) -> Self {
        Self {
            upstream: Upstream {
                league,
                base_url: config.api_url.clone(),
                client,
                retry,
            },
            season_uuid: config.season_uuid.clone(),
            series_uuid: config.series_uuid.clone(),
            game_type_uuid: config.game_type_uuid.clone(),
            logos,
        }
    }

    fn season_params<'a>(&'a self, extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
        let mut params = vec![
            ("seasonUuid", self.season_uuid.as_str()),
            ("seriesUuid", self.series_uuid.as_str()),
            ("gameTypeUuid", self.game_type_uuid.as_str()),
        ];
        params.extend_from_slice(extra);
        params
    }

    async fn athletes<T: serde::de::DeserializeOwned>(
        &self,
        resource: &'static str,
        position: &str,
    ) -> Result<T> {
        let url = self.upstream.url(
            ATHLETE_STATS_PATH,
            &self.season_params(&[("position", position)]),
        )?;
        self.upstream.get(resource, url).await
    }
}

#[async_trait]
impl LeagueProvider for StatnetProvider {
    fn league(&self) -> League {
        self.upstream.league
    }

    fn logo_template(&self) -> &LogoUrlTemplate {
        &self.logos
    }

    async fn fetch_games(&self) -> Result<GamesPayload> {
        let url = self
            .upstream
            .url(SCHEDULE_PATH, &self.season_params(&[("played", "all")]))?;
        let schedule: GameSchedule = self.upstream.get("games", url).await?;
        let rows = schedule.game_info.len();
        self.upstream
            .require_rows("games", GamesPayload::Statnet(schedule), rows)
    }

    async fn fetch_standings(&self) -> Result<StandingsPayload> {
        let url = self.upstream.url(STANDINGS_PATH, &self.season_params(&[]))?;
        let table: StandingsTable = self.upstream.get("standings", url).await?;
        let rows = table.stats.len();
        self.upstream
            .require_rows("standings", StandingsPayload::Statnet(table), rows)
    }

    async fn fetch_players(&self) -> Result<PlayersPayload> {
        let table: SkaterTable = self.athletes("players", "skater").await?;
        let rows = table.stats.len();
        self.upstream
            .require_rows("players", PlayersPayload::Statnet(table), rows)
    }

    async fn fetch_goalies(&self) -> Result<GoaliesPayload> {
        let table: GoalkeeperTable = self.athletes("goalies", "goalkeeper").await?;
        let rows = table.stats.len();
        self.upstream
            .require_rows("goalies", GoaliesPayload::Statnet(table), rows)
    }
}
