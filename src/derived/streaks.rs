use serde::Serialize;
use std::cmp::Ordering;

use super::team_result;
use crate::model::{GameInfo, TeamInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStreak {
    pub team: TeamInfo,
    /// Run of identical outcomes ending with the most recent finished game
    pub current: Streak,
    pub longest_win: u32,
    pub longest_loss: u32,
}

/// Distinct teams in order of first appearance.
fn teams(games: &[GameInfo]) -> Vec<&TeamInfo> {
    let mut teams: Vec<&TeamInfo> = Vec::new();
    for game in games {
        for side in [&game.home_team_info, &game.away_team_info] {
            if !teams.iter().any(|t| t.has_code(&side.team_info.code)) {
                teams.push(&side.team_info);
            }
        }
    }
    teams
}

fn team_streak(games: &[GameInfo], team: &TeamInfo) -> Option<TeamStreak> {
    let mut played: Vec<(&GameInfo, StreakKind)> = games
        .iter()
        .filter_map(|game| {
            let (_, _, outcome) = team_result(game, &team.code)?;
            let kind = if outcome.is_win() {
                StreakKind::Win
            } else {
                StreakKind::Loss
            };
            Some((game, kind))
        })
        .collect();
    played.sort_by_key(|(game, _)| game.start_date_time);

    let mut current: Option<Streak> = None;
    let (mut longest_win, mut longest_loss) = (0, 0);
    for (_, kind) in played {
        let streak = match current {
            Some(run) if run.kind == kind => Streak {
                kind,
                length: run.length + 1,
            },
            _ => Streak { kind, length: 1 },
        };
        match kind {
            StreakKind::Win => longest_win = longest_win.max(streak.length),
            StreakKind::Loss => longest_loss = longest_loss.max(streak.length),
        }
        current = Some(streak);
    }

    Some(TeamStreak {
        team: team.clone(),
        current: current?,
        longest_win,
        longest_loss,
    })
}

/// Display order: win streaks before loss streaks, longer win streaks first,
/// shorter loss streaks first, then team name.
fn display_order(a: &TeamStreak, b: &TeamStreak) -> Ordering {
    let by_streak = match (a.current.kind, b.current.kind) {
        (StreakKind::Win, StreakKind::Loss) => Ordering::Less,
        (StreakKind::Loss, StreakKind::Win) => Ordering::Greater,
        (StreakKind::Win, StreakKind::Win) => b.current.length.cmp(&a.current.length),
        (StreakKind::Loss, StreakKind::Loss) => a.current.length.cmp(&b.current.length),
    };
    by_streak.then_with(|| a.team.display_name().cmp(b.team.display_name()))
}

/// Current and longest streaks for every team with at least one counted game.
pub fn streaks(games: &[GameInfo]) -> Vec<TeamStreak> {
    let mut result: Vec<TeamStreak> = teams(games)
        .into_iter()
        .filter_map(|team| team_streak(games, team))
        .collect();
    result.sort_by(display_order);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::fixtures::*;

    fn streak_of<'a>(streaks: &'a [TeamStreak], code: &str) -> Option<&'a TeamStreak> {
        streaks.iter().find(|s| s.team.code == code)
    }

    #[test]
    fn current_streak_counts_back_from_most_recent() {
        // Oldest first: loss, win, win
        let games = vec![
            finished("a", at(1, 18), ("LHF", 1), ("FBK", 3)),
            finished("b", at(3, 18), ("LHF", 4), ("SAIK", 0)),
            finished("c", at(5, 18), ("RBK", 2), ("LHF", 3)),
        ];
        let streaks = streaks(&games);
        let lhf = streak_of(&streaks, "LHF").unwrap();
        assert_eq!(
            lhf.current,
            Streak {
                kind: StreakKind::Win,
                length: 2
            }
        );
        assert_eq!(lhf.longest_win, 2);
        assert_eq!(lhf.longest_loss, 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        let games = vec![
            finished("c", at(5, 18), ("RBK", 2), ("LHF", 3)),
            finished("a", at(1, 18), ("LHF", 1), ("FBK", 3)),
            finished("b", at(3, 18), ("LHF", 4), ("SAIK", 0)),
        ];
        let lhf = streak_of(&streaks(&games), "LHF").cloned().unwrap();
        assert_eq!(lhf.current.length, 2);
        assert_eq!(lhf.current.kind, StreakKind::Win);
    }

    #[test]
    fn single_win() {
        let games = vec![finished("a", at(1, 18), ("LHF", 2), ("FBK", 1))];
        let lhf = streak_of(&streaks(&games), "LHF").cloned().unwrap();
        assert_eq!(
            lhf.current,
            Streak {
                kind: StreakKind::Win,
                length: 1
            }
        );
    }

    #[test]
    fn teams_without_finished_games_are_excluded() {
        let games = vec![
            finished("a", at(1, 18), ("LHF", 2), ("FBK", 1)),
            scheduled("b", at(9, 18), "SAIK", "RBK"),
        ];
        let streaks = streaks(&games);
        assert_eq!(streaks.len(), 2);
        assert!(streak_of(&streaks, "SAIK").is_none());
        assert!(streak_of(&streaks, "RBK").is_none());
    }

    #[test]
    fn overtime_results_count_as_wins_and_losses() {
        let mut game = finished("a", at(1, 18), ("LHF", 3), ("FBK", 2));
        game.overtime = true;
        let streaks = streaks(&[game]);
        assert_eq!(streak_of(&streaks, "LHF").unwrap().current.kind, StreakKind::Win);
        assert_eq!(streak_of(&streaks, "FBK").unwrap().current.kind, StreakKind::Loss);
    }

    #[test]
    fn display_ordering() {
        // LHF W2, MIF W1, SAIK W1, FBK L1, HV71 L1, RBK L2
        let games = vec![
            finished("1", at(1, 18), ("LHF", 3), ("RBK", 1)),
            finished("2", at(2, 18), ("SAIK", 1), ("FBK", 0)),
            finished("3", at(3, 18), ("LHF", 2), ("RBK", 0)),
            finished("4", at(4, 18), ("MIF", 5), ("HV71", 4)),
            finished("5", at(5, 18), ("HV71", 2), ("SAIK", 1)),
            finished("6", at(6, 18), ("SAIK", 4), ("HV71", 3)),
        ];
        let order: Vec<String> = streaks(&games).into_iter().map(|s| s.team.code).collect();
        assert_eq!(order, ["LHF", "MIF", "SAIK", "FBK", "HV71", "RBK"]);
    }

    #[test]
    fn idempotent() {
        let games = vec![
            finished("1", at(1, 18), ("LHF", 3), ("RBK", 1)),
            finished("2", at(2, 18), ("RBK", 2), ("LHF", 1)),
        ];
        assert_eq!(streaks(&games), streaks(&games));
    }
}
