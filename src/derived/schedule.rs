use chrono::{DateTime, Local, NaiveDate, Utc};
use std::str::FromStr;

use crate::model::{GameInfo, GameState};

/// Game list views served by the games endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameView {
    /// Not-finished games starting at or after now, ascending, limited
    Upcoming,
    /// Finished games, most recent first, limited
    Recent,
    All,
    AllUpcoming,
    AllRecent,
    /// Games whose local start date is the given day
    Date(NaiveDate),
}

impl GameView {
    /// Parse the `type` and `date` query parameters.
    pub fn parse(kind: Option<&str>, date: Option<&str>) -> Result<Self, String> {
        match kind.unwrap_or("all") {
            "upcoming" => Ok(GameView::Upcoming),
            "recent" => Ok(GameView::Recent),
            "all" => Ok(GameView::All),
            "all-upcoming" => Ok(GameView::AllUpcoming),
            "all-recent" => Ok(GameView::AllRecent),
            "date" => {
                let raw = date.ok_or("type=date requires a date parameter")?;
                NaiveDate::from_str(raw)
                    .map(GameView::Date)
                    .map_err(|_| format!("Invalid date: {raw}, expected YYYY-MM-DD"))
            }
            other => Err(format!("Unknown game type: {other}")),
        }
    }
}

fn for_team<'a>(games: &'a [GameInfo], team: &str) -> impl Iterator<Item = &'a GameInfo> {
    games.iter().filter(move |g| g.involves(team))
}

fn ascending(games: &mut [&GameInfo]) {
    games.sort_by_key(|g| g.start_date_time);
}

fn descending(games: &mut [&GameInfo]) {
    games.sort_by(|a, b| b.start_date_time.cmp(&a.start_date_time));
}

/// Earliest not-started game for `team` that starts after `now`.
pub fn next_game<'a>(games: &'a [GameInfo], team: &str, now: DateTime<Utc>) -> Option<&'a GameInfo> {
    games
        .iter()
        .filter(|g| g.involves(team))
        .filter(|g| g.state == GameState::NotStarted && g.start_date_time > now)
        .min_by_key(|g| g.start_date_time)
}

/// The `limit` most recent games for `team` that started at or before `now`.
pub fn previous_games<'a>(
    games: &'a [GameInfo],
    team: &str,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a GameInfo> {
    let mut past: Vec<&GameInfo> = for_team(games, team)
        .filter(|g| g.start_date_time <= now)
        .collect();
    descending(&mut past);
    past.truncate(limit);
    past
}

/// Future games for `team` after the next one.
///
/// The next game is always skipped so this window follows [`next_game`]
/// without overlapping it.
pub fn upcoming_games<'a>(
    games: &'a [GameInfo],
    team: &str,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a GameInfo> {
    let mut future: Vec<&GameInfo> = for_team(games, team)
        .filter(|g| g.state == GameState::NotStarted && g.start_date_time > now)
        .collect();
    ascending(&mut future);
    future.into_iter().skip(1).take(limit).collect()
}

/// League-wide selection for a [`GameView`], optionally narrowed to one team.
pub fn select_games<'a>(
    games: &'a [GameInfo],
    view: GameView,
    team: Option<&str>,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a GameInfo> {
    let mut selected: Vec<&GameInfo> = games
        .iter()
        .filter(|g| team.is_none_or(|code| g.involves(code)))
        .filter(|g| match view {
            GameView::Upcoming => !g.is_finished() && g.start_date_time >= now,
            GameView::AllUpcoming => !g.is_finished(),
            GameView::Recent | GameView::AllRecent => g.is_finished(),
            GameView::All => true,
            GameView::Date(day) => g.start_date_time.with_timezone(&Local).date_naive() == day,
        })
        .collect();

    match view {
        GameView::Recent | GameView::AllRecent => descending(&mut selected),
        _ => ascending(&mut selected),
    }
    if matches!(view, GameView::Upcoming | GameView::Recent) {
        selected.truncate(limit);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::game::fixtures::*;

    fn uuids(games: &[&GameInfo]) -> Vec<String> {
        games.iter().map(|g| g.uuid.clone()).collect()
    }

    fn season() -> Vec<GameInfo> {
        vec![
            scheduled("g4", at(20, 18), "LHF", "SAIK"),
            finished("p1", at(1, 18), ("LHF", 2), ("FBK", 1)),
            scheduled("g2", at(10, 18), "FBK", "LHF"),
            finished("p2", at(3, 18), ("SAIK", 0), ("LHF", 5)),
            scheduled("g1", at(8, 18), "LHF", "RBK"),
            scheduled("g3", at(15, 18), "LHF", "FBK"),
            scheduled("x1", at(9, 6), "FBK", "SAIK"),
        ]
    }

    #[test]
    fn next_game_is_earliest_future_not_started() {
        let games = season();
        let next = next_game(&games, "lhf", at(5, 12)).unwrap();
        assert_eq!(next.uuid, "g1");
        assert!(next_game(&games, "LHF", at(25, 0)).is_none());
    }

    #[test]
    fn upcoming_skips_the_next_game() {
        let games = season();
        let upcoming = upcoming_games(&games, "LHF", at(5, 12), 2);
        assert_eq!(uuids(&upcoming), ["g2", "g3"]);
    }

    #[test]
    fn previous_games_most_recent_first() {
        let games = season();
        let previous = previous_games(&games, "LHF", at(5, 12), 10);
        assert_eq!(uuids(&previous), ["p2", "p1"]);
        assert_eq!(previous_games(&games, "LHF", at(5, 12), 1).len(), 1);
    }

    #[test]
    fn selection_does_not_reorder_input() {
        let games = season();
        let before: Vec<String> = games.iter().map(|g| g.uuid.clone()).collect();
        let first = upcoming_games(&games, "LHF", at(5, 12), 3);
        let second = upcoming_games(&games, "LHF", at(5, 12), 3);
        assert_eq!(first, second);
        let after: Vec<String> = games.iter().map(|g| g.uuid.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn views_select_and_order() {
        let games = season();
        let now = at(5, 12);

        let upcoming = select_games(&games, GameView::Upcoming, None, now, 2);
        assert_eq!(uuids(&upcoming), ["g1", "x1"]);

        let recent = select_games(&games, GameView::Recent, None, now, 10);
        assert_eq!(uuids(&recent), ["p2", "p1"]);

        let all = select_games(&games, GameView::All, None, now, 1);
        assert_eq!(all.len(), games.len());
        assert_eq!(all[0].uuid, "p1");

        let fbk = select_games(&games, GameView::AllUpcoming, Some("fbk"), now, 0);
        assert_eq!(uuids(&fbk), ["x1", "g2", "g3"]);
    }

    #[test]
    fn date_view_matches_local_day() {
        let games = season();
        let day = at(10, 18).with_timezone(&Local).date_naive();
        let selected = select_games(&games, GameView::Date(day), None, at(1, 0), 10);
        assert_eq!(uuids(&selected), ["g2"]);
    }

    #[test]
    fn parses_views() {
        assert_eq!(GameView::parse(None, None), Ok(GameView::All));
        assert_eq!(
            GameView::parse(Some("all-recent"), None),
            Ok(GameView::AllRecent)
        );
        assert_eq!(
            GameView::parse(Some("date"), Some("2024-10-05")),
            Ok(GameView::Date(NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()))
        );
        assert!(GameView::parse(Some("date"), None).is_err());
        assert!(GameView::parse(Some("date"), Some("05/10/2024")).is_err());
        assert!(GameView::parse(Some("tomorrow"), None).is_err());
    }
}
