use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::parse_league;
use crate::derived::{GameView, select_games};
use crate::error::{PuckError, Result};
use crate::model::{GameInfo, GoalieReport, PlayerReport, StandingsReport, TeamInfo};
use crate::server::state::AppState;

const DEFAULT_GAME_LIMIT: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct GamesQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub team: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamQuery {
    pub team: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesResponse {
    pub game_info: Vec<GameInfo>,
}

/// Games for one league, shaped by the `type` view
pub async fn games(
    Path(league): Path<String>,
    query: std::result::Result<Query<GamesQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<GamesResponse>> {
    let league = parse_league(&league)?;
    let Query(query) = query?;
    let view = GameView::parse(query.kind.as_deref(), query.date.as_deref())
        .map_err(PuckError::InvalidRequest)?;
    info!("Serving {} games ({:?})", league, view);

    let games = state.service.games(league).await?;
    let selected = select_games(
        &games,
        view,
        query.team.as_deref(),
        Utc::now(),
        query.limit.unwrap_or(DEFAULT_GAME_LIMIT),
    );

    Ok(Json(GamesResponse {
        game_info: selected.into_iter().cloned().collect(),
    }))
}

pub async fn standings(
    Path(league): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Arc<StandingsReport>>> {
    let league = parse_league(&league)?;
    Ok(Json(state.service.standings(league).await?))
}

pub async fn players(
    Path(league): Path<String>,
    query: std::result::Result<Query<TeamQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<Arc<PlayerReport>>> {
    let league = parse_league(&league)?;
    let Query(query) = query?;
    Ok(Json(
        state
            .service
            .players(league, query.team.as_deref())
            .await?,
    ))
}

pub async fn goalies(
    Path(league): Path<String>,
    query: std::result::Result<Query<TeamQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<Arc<GoalieReport>>> {
    let league = parse_league(&league)?;
    let Query(query) = query?;
    Ok(Json(
        state
            .service
            .goalies(league, query.team.as_deref())
            .await?,
    ))
}

pub async fn teams(
    Path(league): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamInfo>>> {
    let league = parse_league(&league)?;
    Ok(Json(state.service.teams(league).await?))
}
