use serde::Serialize;

use super::{Outcome, team_result};
use crate::model::GameInfo;

/// Win/loss record over a set of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "OTW")]
    pub overtime_wins: u32,
    #[serde(rename = "OTL")]
    pub overtime_losses: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "Points")]
    pub points: u32,
}

impl TeamRecord {
    fn add(&mut self, goals_for: u32, goals_against: u32, outcome: Outcome) {
        self.games_played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::OvertimeWin => self.overtime_wins += 1,
            Outcome::OvertimeLoss => self.overtime_losses += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.points = self.wins * 3 + self.overtime_wins * 2 + self.overtime_losses;
    }
}

/// Total, home, away and last-N records for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSplits {
    pub total: TeamRecord,
    pub home: TeamRecord,
    pub away: TeamRecord,
    #[serde(rename = "lastN")]
    pub last_n: TeamRecord,
}

fn tally<'a>(games: impl IntoIterator<Item = &'a GameInfo>, team: &str) -> TeamRecord {
    games
        .into_iter()
        .filter_map(|game| team_result(game, team))
        .fold(TeamRecord::default(), |mut record, (gf, ga, outcome)| {
            record.add(gf, ga, outcome);
            record
        })
}

/// Record over every counted game of `team`.
///
/// Only finished games with both scores recorded count.
pub fn team_record(games: &[GameInfo], team: &str) -> TeamRecord {
    tally(games, team)
}

pub fn home_record(games: &[GameInfo], team: &str) -> TeamRecord {
    tally(
        games
            .iter()
            .filter(|g| g.home_team_info.team_info.has_code(team)),
        team,
    )
}

pub fn away_record(games: &[GameInfo], team: &str) -> TeamRecord {
    tally(
        games
            .iter()
            .filter(|g| g.away_team_info.team_info.has_code(team)),
        team,
    )
}

/// Record over the `n` most recent counted games.
pub fn last_n_record(games: &[GameInfo], team: &str, n: usize) -> TeamRecord {
    let mut counted: Vec<&GameInfo> = games
        .iter()
        .filter(|g| team_result(g, team).is_some())
        .collect();
    counted.sort_by(|a, b| b.start_date_time.cmp(&a.start_date_time));
    tally(counted.into_iter().take(n), team)
}

pub fn team_splits(games: &[GameInfo], team: &str, n: usize) -> TeamSplits {
    TeamSplits {
        total: team_record(games, team),
        home: home_record(games, team),
        away: away_record(games, team),
        last_n: last_n_record(games, team, n),
    }
}
