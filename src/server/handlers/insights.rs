//! Derived statistics over the cached game list. Recomputed on every request.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::parse_league;
use crate::derived::{
    self, LargestWins, ScoringExtremes, TeamSplits, TeamStreak, next_game, previous_games,
    team_splits, upcoming_games,
};
use crate::error::Result;
use crate::model::GameInfo;
use crate::server::state::AppState;

const DEFAULT_OVERVIEW_LIMIT: usize = 5;

#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TeamOverview {
    pub next: Option<GameInfo>,
    pub previous: Vec<GameInfo>,
    pub upcoming: Vec<GameInfo>,
    pub splits: TeamSplits,
}

/// Next, previous and upcoming games plus record splits for one team
pub async fn team_overview(
    Path((league, code)): Path<(String, String)>,
    query: std::result::Result<Query<OverviewQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<TeamOverview>> {
    let league = parse_league(&league)?;
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_OVERVIEW_LIMIT);
    let games = state.service.games(league).await?;
    let now = Utc::now();

    Ok(Json(TeamOverview {
        next: next_game(&games, &code, now).cloned(),
        previous: previous_games(&games, &code, now, limit)
            .into_iter()
            .cloned()
            .collect(),
        upcoming: upcoming_games(&games, &code, now, limit)
            .into_iter()
            .cloned()
            .collect(),
        splits: team_splits(&games, &code, limit),
    }))
}

pub async fn streaks(
    Path(league): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamStreak>>> {
    let league = parse_league(&league)?;
    let games = state.service.games(league).await?;
    Ok(Json(derived::streaks(&games)))
}

pub async fn largest_wins(
    Path(league): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LargestWins>> {
    let league = parse_league(&league)?;
    let games = state.service.games(league).await?;
    Ok(Json(derived::largest_wins(&games)))
}

pub async fn scoring_extremes(
    Path(league): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ScoringExtremes>> {
    let league = parse_league(&league)?;
    let games = state.service.games(league).await?;
    Ok(Json(derived::scoring_extremes(&games)))
}
