//! Read operations per league: cache → provider → translator.

use chrono::{DateTime, Utc};
use futures_util::future::{join, join_all};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{DataCache, cache_key};
use crate::config::Config;
use crate::error::{PuckError, Result};
use crate::model::{GameInfo, GameState, GoalieReport, League, PlayerReport, StandingsReport, TeamInfo};
use crate::provider::{ChlProvider, LeagueProvider, StatnetProvider};
use crate::translate::{self, LogoUrlTemplate, Translation};

/// Translated league data behind the shared cache.
#[derive(Clone)]
pub struct LeagueService {
    providers: HashMap<League, Arc<dyn LeagueProvider>>,
    cache: DataCache,
}

impl LeagueService {
    pub fn new(cache: DataCache) -> Self {
        Self {
            providers: HashMap::new(),
            cache,
        }
    }

    /// Register `provider` for the league it reports; replaces any previous one.
    pub fn with_provider(mut self, provider: Arc<dyn LeagueProvider>) -> Self {
        self.providers.insert(provider.league(), provider);
        self
    }

    /// SHL and SDHL on Statnet, CHL on its own API.
    pub fn from_config(config: &Config, client: Client, cache: DataCache) -> Self {
        let retry = config.retry_config();
        let statnet_logos = LogoUrlTemplate::new(config.statnet_logo_url_template.clone());
        let chl_logos = LogoUrlTemplate::new(config.chl_logo_url_template.clone());

        Self::new(cache)
            .with_provider(Arc::new(StatnetProvider::new(
                League::Shl,
                &config.shl,
                statnet_logos.clone(),
                client.clone(),
                retry.clone(),
            )))
            .with_provider(Arc::new(StatnetProvider::new(
                League::Sdhl,
                &config.sdhl,
                statnet_logos,
                client.clone(),
                retry.clone(),
            )))
            .with_provider(Arc::new(ChlProvider::new(
                &config.chl,
                chl_logos,
                client,
                retry,
            )))
    }

    pub fn cache(&self) -> &DataCache {
        &self.cache
    }

    fn provider(&self, league: League) -> Result<&dyn LeagueProvider> {
        self.providers
            .get(&league)
            .map(|p| p.as_ref())
            .ok_or_else(|| PuckError::InternalError(format!("No provider configured for {league}")))
    }

    fn key(league: League, resource: &str) -> String {
        cache_key(&format!("{league}-{resource}"), std::iter::empty())
    }

    /// Every game of the season, in upstream order.
    pub async fn games(&self, league: League) -> Result<Arc<Vec<GameInfo>>> {
        self.games_at(league, Utc::now()).await
    }

    /// [`games`](Self::games) with states as of `now`.
    pub async fn games_at(&self, league: League, now: DateTime<Utc>) -> Result<Arc<Vec<GameInfo>>> {
        let provider = self.provider(league)?;
        let key = Self::key(league, "games");
        let games: Arc<Vec<GameInfo>> = self
            .cache
            .get_or_fetch(&key, || async move {
                let payload = provider.fetch_games().await?;
                let ctx = Translation {
                    now,
                    logos: provider.logo_template(),
                };
                let games = translate::games(payload, &ctx);
                info!("Translated {} {} games", games.len(), league);
                Ok(Arc::new(games))
            })
            .await?;
        Ok(promote_started(games, now))
    }

    pub async fn standings(&self, league: League) -> Result<Arc<StandingsReport>> {
        let provider = self.provider(league)?;
        let key = Self::key(league, "standings");
        self.cache
            .get_or_fetch(&key, || async move {
                let payload = provider.fetch_standings().await?;
                Ok(Arc::new(translate::standings(
                    payload,
                    provider.logo_template(),
                )))
            })
            .await
    }

    /// Skater stats, optionally narrowed to one team after the cache.
    pub async fn players(&self, league: League, team: Option<&str>) -> Result<Arc<PlayerReport>> {
        let provider = self.provider(league)?;
        let key = Self::key(league, "players");
        let report: Arc<PlayerReport> = self
            .cache
            .get_or_fetch(&key, || async move {
                let payload = provider.fetch_players().await?;
                Ok(Arc::new(translate::players(payload)))
            })
            .await?;

        Ok(match team {
            Some(code) => Arc::new(report.for_team(code)),
            None => report,
        })
    }

    pub async fn goalies(&self, league: League, team: Option<&str>) -> Result<Arc<GoalieReport>> {
        let provider = self.provider(league)?;
        let key = Self::key(league, "goalies");
        let report: Arc<GoalieReport> = self
            .cache
            .get_or_fetch(&key, || async move {
                let payload = provider.fetch_goalies().await?;
                Ok(Arc::new(translate::goalies(payload)))
            })
            .await?;

        Ok(match team {
            Some(code) => Arc::new(report.for_team(code)),
            None => report,
        })
    }

    /// Teams in standings order.
    pub async fn teams(&self, league: League) -> Result<Vec<TeamInfo>> {
        Ok(self.standings(league).await?.teams())
    }

    /// Prefetch games and standings for every configured league.
    ///
    /// Returns how many fetches failed; failures are logged, never cached.
    pub async fn warm_all(&self) -> usize {
        let mut leagues: Vec<League> = self.providers.keys().copied().collect();
        leagues.sort_by_key(|l| l.slug());

        let fetches = leagues.iter().map(|&league| async move {
            let (games, standings) = join(self.games(league), self.standings(league)).await;
            [games.map(|_| ()), standings.map(|_| ())]
        });

        let failures = join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .filter_map(|r| r.err())
            .inspect(|e| warn!("Cache warm-up fetch failed: {}", e))
            .count();
        debug!("Cache warm-up done, {} failures", failures);
        failures
    }
}

/// Cached snapshots keep the state from translation time. Games that have
/// started since are served as live; their scores stay unrecorded until the
/// next fetch.
fn promote_started(games: Arc<Vec<GameInfo>>, now: DateTime<Utc>) -> Arc<Vec<GameInfo>> {
    if !games.iter().any(|g| g.has_started_since(now)) {
        return games;
    }
    debug!("Promoting started games to live");
    Arc::new(
        games
            .iter()
            .cloned()
            .map(|mut game| {
                if game.has_started_since(now) {
                    game.state = GameState::Live;
                }
                game
            })
            .collect(),
    )
}
