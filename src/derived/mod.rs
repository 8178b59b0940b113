//! Statistics derived from translated games.
//!
//! Everything here is a pure function over `&[GameInfo]`: inputs are never
//! reordered, time-dependent selections take `now` explicitly and nothing is
//! cached.

pub mod margins;
pub mod record;
pub mod schedule;
pub mod streaks;

pub use margins::{LargestWins, MARGIN_LIMIT, MarginGame, ScoringExtremes, largest_wins, scoring_extremes};
pub use record::{TeamRecord, TeamSplits, away_record, home_record, last_n_record, team_record, team_splits};
pub use schedule::{GameView, next_game, previous_games, select_games, upcoming_games};
pub use streaks::{Streak, StreakKind, TeamStreak, streaks};

use crate::model::GameInfo;

/// Result of a finished game from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    OvertimeWin,
    OvertimeLoss,
    Loss,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win | Outcome::OvertimeWin)
    }
}

/// Goals for, goals against and outcome for `team`.
///
/// `None` unless the game is finished, involves the team and has both
/// scores recorded.
pub(crate) fn team_result(game: &GameInfo, team: &str) -> Option<(u32, u32, Outcome)> {
    if !game.is_finished() {
        return None;
    }
    let (home, away) = game.scores()?;
    let (goals_for, goals_against) = if game.home_team_info.team_info.has_code(team) {
        (home, away)
    } else if game.away_team_info.team_info.has_code(team) {
        (away, home)
    } else {
        return None;
    };

    let outcome = match (goals_for > goals_against, game.went_to_extra_time()) {
        _ if goals_for == goals_against => return None,
        (true, false) => Outcome::Win,
        (true, true) => Outcome::OvertimeWin,
        (false, true) => Outcome::OvertimeLoss,
        (false, false) => Outcome::Loss,
    };
    Some((goals_for, goals_against, outcome))
}
