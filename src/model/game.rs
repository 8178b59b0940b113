use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::team::TeamInfo;

/// Lifecycle of a game as seen by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    NotStarted,
    Live,
    Finished,
}

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTeamInfo {
    pub team_info: TeamInfo,
    /// `None` until the provider has recorded a score for this side
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInfo {
    pub name: String,
}

/// Immutable snapshot of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub uuid: String,
    pub start_date_time: DateTime<Utc>,
    pub state: GameState,
    pub home_team_info: GameTeamInfo,
    pub away_team_info: GameTeamInfo,
    pub venue_info: VenueInfo,
    pub overtime: bool,
    pub shootout: bool,
}

impl GameInfo {
    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Still marked not-started although its start time has passed.
    pub fn has_started_since(&self, now: DateTime<Utc>) -> bool {
        self.state == GameState::NotStarted && now > self.start_date_time
    }

    /// Whether the team plays in this game, on either side.
    pub fn involves(&self, code: &str) -> bool {
        self.home_team_info.team_info.has_code(code) || self.away_team_info.team_info.has_code(code)
    }

    /// Both scores, when both have been recorded.
    pub fn scores(&self) -> Option<(u32, u32)> {
        Some((self.home_team_info.score?, self.away_team_info.score?))
    }

    /// Decided after regulation time.
    pub fn went_to_extra_time(&self) -> bool {
        self.overtime || self.shootout
    }

    pub fn total_goals(&self) -> Option<u32> {
        self.scores().map(|(home, away)| home + away)
    }

    pub fn goal_difference(&self) -> Option<u32> {
        self.scores().map(|(home, away)| home.abs_diff(away))
    }
}
