use serde::Serialize;

use crate::model::GameInfo;

/// Length cap for every margin list.
pub const MARGIN_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginGame {
    pub game: GameInfo,
    pub goal_difference: u32,
    pub total_goals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LargestWins {
    pub home: Vec<MarginGame>,
    pub away: Vec<MarginGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoringExtremes {
    pub highest: Vec<MarginGame>,
    pub lowest: Vec<MarginGame>,
}

/// Finished games with both scores recorded, in input order.
fn decided(games: &[GameInfo]) -> impl Iterator<Item = (&GameInfo, (u32, u32))> {
    games
        .iter()
        .filter(|g| g.is_finished())
        .filter_map(|g| g.scores().map(|scores| (g, scores)))
}

fn margin(game: &GameInfo, (home, away): (u32, u32)) -> MarginGame {
    MarginGame {
        game: game.clone(),
        goal_difference: home.abs_diff(away),
        total_goals: home + away,
    }
}

fn by_margin(list: &mut Vec<MarginGame>) {
    list.sort_by(|a, b| {
        b.goal_difference
            .cmp(&a.goal_difference)
            .then(b.total_goals.cmp(&a.total_goals))
    });
    list.truncate(MARGIN_LIMIT);
}

/// Biggest home and away wins, by goal difference then total goals.
pub fn largest_wins(games: &[GameInfo]) -> LargestWins {
    let mut wins = LargestWins::default();
    for (game, scores) in decided(games) {
        match scores.0.cmp(&scores.1) {
            std::cmp::Ordering::Greater => wins.home.push(margin(game, scores)),
            std::cmp::Ordering::Less => wins.away.push(margin(game, scores)),
            std::cmp::Ordering::Equal => {}
        }
    }
    by_margin(&mut wins.home);
    by_margin(&mut wins.away);
    wins
}

/// Highest and lowest scoring games.
///
/// Ties on total goals break on goal difference (larger first for the
/// highest list, smaller first for the lowest); remaining ties keep input
/// order.
pub fn scoring_extremes(games: &[GameInfo]) -> ScoringExtremes {
    let all: Vec<MarginGame> = decided(games)
        .map(|(game, scores)| margin(game, scores))
        .collect();

    let mut highest = all.clone();
    highest.sort_by(|a, b| {
        b.total_goals
            .cmp(&a.total_goals)
            .then(b.goal_difference.cmp(&a.goal_difference))
    });
    highest.truncate(MARGIN_LIMIT);

    let mut lowest = all;
    lowest.sort_by(|a, b| {
        a.total_goals
            .cmp(&b.total_goals)
            .then(a.goal_difference.cmp(&b.goal_difference))
    });
    lowest.truncate(MARGIN_LIMIT);

    ScoringExtremes { highest, lowest }
}
