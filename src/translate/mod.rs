//! Provider payload → domain model.
//!
//! Translation is pure and total: required fields are enforced when the
//! payload is decoded, anything optional gets a fallback here.

pub mod chl;
pub mod statnet;

use chrono::{DateTime, Utc};

use crate::model::{DataColumn, GameInfo, GameState, GoalieReport, PlayerReport, StandingsReport};
use crate::wire::{GamesPayload, GoaliesPayload, PlayersPayload, StandingsPayload};

pub const PLAYER_SORT_KEY: &str = "TP";
pub const GOALIE_SORT_KEY: &str = "SVSPerc";

/// Provider-specific logo URL template with an `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUrlTemplate(String);

impl LogoUrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Logo URL for `id`; empty when there is no usable identifier.
    pub fn render(&self, id: Option<&str>) -> String {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => self.0.replace("{id}", id),
            _ => String::new(),
        }
    }
}

/// Inputs a translator needs besides the payload itself.
#[derive(Debug, Clone)]
pub struct Translation<'a> {
    pub now: DateTime<Utc>,
    pub logos: &'a LogoUrlTemplate,
}

pub fn games(payload: GamesPayload, ctx: &Translation<'_>) -> Vec<GameInfo> {
    match payload {
        GamesPayload::Statnet(schedule) => statnet::schedule(schedule, ctx),
        GamesPayload::Chl(list) => chl::schedule(list, ctx),
    }
}

pub fn standings(payload: StandingsPayload, logos: &LogoUrlTemplate) -> StandingsReport {
    match payload {
        StandingsPayload::Statnet(table) => statnet::standings(table, logos),
        StandingsPayload::Chl(list) => chl::standings(list, logos),
    }
}

pub fn players(payload: PlayersPayload) -> PlayerReport {
    match payload {
        PlayersPayload::Statnet(table) => statnet::players(table),
        PlayersPayload::Chl(list) => chl::players(list),
    }
}

pub fn goalies(payload: GoaliesPayload) -> GoalieReport {
    match payload {
        GoaliesPayload::Statnet(table) => statnet::goalies(table),
        GoaliesPayload::Chl(list) => chl::goalies(list),
    }
}

/// A scheduled game whose start time has passed is live.
pub(crate) fn resolve_state(
    finished: bool,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> GameState {
    if finished {
        GameState::Finished
    } else if now > start {
        GameState::Live
    } else {
        GameState::NotStarted
    }
}

/// Rank from upstream position.
pub(crate) fn rank(index: usize) -> Option<u32> {
    u32::try_from(index + 1).ok()
}

pub(crate) fn standings_columns() -> Vec<DataColumn> {
    ["GP", "W", "OTW", "OTL", "L", "G", "GA", "GD"]
        .into_iter()
        .map(DataColumn::number)
        .chain(std::iter::once(DataColumn::highlighted("Points")))
        .collect()
}

pub(crate) fn player_columns() -> Vec<DataColumn> {
    vec![
        DataColumn::number("GP"),
        DataColumn::number("G"),
        DataColumn::number("A"),
        DataColumn::highlighted("TP"),
        DataColumn::number("PIM"),
        DataColumn::number("+/-"),
    ]
}

pub(crate) fn goalie_columns() -> Vec<DataColumn> {
    vec![
        DataColumn::number("GP"),
        DataColumn::number("SVS"),
        DataColumn::number("GA"),
        DataColumn::number("GAA"),
        DataColumn::highlighted("SVSPerc"),
        DataColumn::number("SO"),
    ]
}

/// First non-empty candidate, or an empty string.
pub(crate) fn first_non_empty(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
