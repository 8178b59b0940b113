//! Provider-agnostic domain model.
//!
//! Everything the translators produce and the derived engine consumes lives
//! here. Types serialize to the camelCase JSON shapes served by the read
//! endpoints.

pub mod game;
pub mod league;
pub mod stats;
pub mod team;

pub use game::{GameInfo, GameState, GameTeamInfo, VenueInfo};
pub use league::League;
pub use stats::{
    DataColumn, GoalieReport, GoalieStats, PlayerInfo, PlayerReport, PlayerStats,
    StandingsReport, TeamStats,
};
pub use team::TeamInfo;
