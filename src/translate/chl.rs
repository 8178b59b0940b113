use super::{
    GOALIE_SORT_KEY, LogoUrlTemplate, PLAYER_SORT_KEY, Translation, first_non_empty,
    goalie_columns, player_columns, rank, resolve_state, standings_columns,
};
use crate::model::{
    GameInfo, GameState, GameTeamInfo, GoalieReport, GoalieStats, PlayerInfo, PlayerReport,
    PlayerStats, StandingsReport, TeamInfo, TeamStats, VenueInfo,
};
use crate::wire::chl::{
    ChlGame, ChlGameTeam, ChlPlayer, ChlTeam, GameList, GoalieList, SkaterList, StandingsList,
};

const FINISHED_STATUS: &str = "finished";

/// How a finished CHL game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Regulation,
    Overtime,
    Shootout,
}

fn decision(raw: Option<&str>) -> Decision {
    match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
        Some("OT") => Decision::Overtime,
        Some("SO") => Decision::Shootout,
        _ => Decision::Regulation,
    }
}

pub fn game(game: ChlGame, ctx: &Translation<'_>) -> GameInfo {
    let finished = game
        .status
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(FINISHED_STATUS));
    let state = resolve_state(finished, game.start_date, ctx.now);
    let decided_by = decision(game.decision.as_deref());

    GameInfo {
        uuid: game.id,
        start_date_time: game.start_date,
        state,
        home_team_info: game_team(game.teams.home, state, ctx.logos),
        away_team_info: game_team(game.teams.away, state, ctx.logos),
        venue_info: VenueInfo {
            name: game.venue.and_then(|venue| venue.name).unwrap_or_default(),
        },
        overtime: decided_by == Decision::Overtime,
        shootout: decided_by == Decision::Shootout,
    }
}

fn game_team(side: ChlGameTeam, state: GameState, logos: &LogoUrlTemplate) -> GameTeamInfo {
    let score = match state {
        GameState::NotStarted => None,
        GameState::Live | GameState::Finished => side.score,
    };
    GameTeamInfo {
        team_info: team(side.team, logos),
        score,
    }
}

/// Team identity. The logo is keyed on `externalId`, the only identifier
/// stable across CHL seasons.
pub fn team(team: ChlTeam, logos: &LogoUrlTemplate) -> TeamInfo {
    let code = first_non_empty(&[team.abbreviation.as_deref(), Some(team.id.as_str())])
        .to_uppercase();
    let short = first_non_empty(&[team.short_name.as_deref(), Some(code.as_str())]);
    let long = first_non_empty(&[team.name.as_deref(), Some(short.as_str())]);
    let full = first_non_empty(&[team.full_name.as_deref(), Some(long.as_str())]);
    let logo = logos.render(team.external_id.as_deref());

    TeamInfo {
        code,
        external_id: team.external_id.unwrap_or_default(),
        short,
        long,
        full,
        logo,
    }
}

fn team_code(team: Option<ChlTeam>) -> String {
    team.map(|t| first_non_empty(&[t.abbreviation.as_deref(), Some(t.id.as_str())]))
        .unwrap_or_default()
        .to_uppercase()
}

fn player(player: ChlPlayer, team: Option<ChlTeam>) -> PlayerInfo {
    PlayerInfo {
        external_id: player.id,
        first_name: player.first_name.unwrap_or_default(),
        last_name: player.last_name.unwrap_or_default(),
        jersey: player.jersey_number,
        position: player.position.unwrap_or_default(),
        nationality: player.nationality.unwrap_or_default(),
        team_code: team_code(team),
        portrait: player.image_url.unwrap_or_default(),
    }
}

pub fn schedule(list: GameList, ctx: &Translation<'_>) -> Vec<GameInfo> {
    list.data.into_iter().map(|g| game(g, ctx)).collect()
}

pub fn standings(list: StandingsList, logos: &LogoUrlTemplate) -> StandingsReport {
    let stats = list
        .data
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let goals_for = row.goals_for.unwrap_or(0);
            let goals_against = row.goals_against.unwrap_or(0);
            TeamStats {
                rank: rank(index),
                info: team(row.team, logos),
                games_played: row.games_played.unwrap_or(0),
                wins: row.wins.unwrap_or(0),
                losses: row.losses.unwrap_or(0),
                // No ties in CHL play
                ties: 0,
                overtime_wins: row.overtime_wins.unwrap_or(0),
                overtime_losses: row.overtime_losses.unwrap_or(0),
                goals_for,
                goals_against,
                goal_difference: goals_for as i32 - goals_against as i32,
                points: row.points.unwrap_or(0),
            }
        })
        .collect();

    StandingsReport {
        data_columns: standings_columns(),
        stats,
    }
}

pub fn players(list: SkaterList) -> PlayerReport {
    let stats = list
        .data
        .into_iter()
        .enumerate()
        .map(|(index, row)| PlayerStats {
            rank: rank(index),
            info: player(row.player, row.team),
            games_played: row.games_played.unwrap_or(0),
            goals: row.goals.unwrap_or(0),
            assists: row.assists.unwrap_or(0),
            points: row.points.unwrap_or(0),
            penalty_minutes: row.penalty_minutes.unwrap_or(0),
            plus_minus: row.plus_minus.unwrap_or(0),
        })
        .collect();

    PlayerReport {
        data_columns: player_columns(),
        default_sort_key: PLAYER_SORT_KEY.to_string(),
        stats,
    }
}

pub fn goalies(list: GoalieList) -> GoalieReport {
    let stats = list
        .data
        .into_iter()
        .enumerate()
        .map(|(index, row)| GoalieStats {
            rank: rank(index),
            info: player(row.player, row.team),
            games_played: row.games_played.unwrap_or(0),
            saves: row.saves.unwrap_or(0),
            goals_against: row.goals_against.unwrap_or(0),
            goals_against_average: row.goals_against_average.unwrap_or(0.0),
            save_percentage: row.save_percentage.unwrap_or(0.0),
            shutouts: row.shutouts.unwrap_or(0),
        })
        .collect();

    GoalieReport {
        data_columns: goalie_columns(),
        default_sort_key: GOALIE_SORT_KEY.to_string(),
        stats,
    }
}
