use super::{
    LogoUrlTemplate, PLAYER_SORT_KEY, GOALIE_SORT_KEY, Translation, first_non_empty,
    goalie_columns, player_columns, rank, resolve_state, standings_columns,
};
use crate::model::{
    DataColumn, GameInfo, GameState, GameTeamInfo, GoalieReport, GoalieStats, PlayerInfo,
    PlayerReport, PlayerStats, StandingsReport, TeamInfo, TeamStats, VenueInfo,
};
use crate::wire::statnet::{
    GameSchedule, GoalkeeperTable, SkaterTable, StandingsTable, StatnetAthlete, StatnetColumn,
    StatnetGame, StatnetGameTeam, StatnetScore, StatnetTeamNames, StatnetTeamRef,
};

const FINISHED_STATE: &str = "post-game";

pub fn game(game: StatnetGame, ctx: &Translation<'_>) -> GameInfo {
    let finished = game
        .state
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(FINISHED_STATE));
    let state = resolve_state(finished, game.start_date_time, ctx.now);

    GameInfo {
        uuid: game.uuid,
        start_date_time: game.start_date_time,
        state,
        home_team_info: game_team(game.home_team_info, state, ctx.logos),
        away_team_info: game_team(game.away_team_info, state, ctx.logos),
        venue_info: VenueInfo {
            name: game
                .venue_info
                .and_then(|venue| venue.name)
                .unwrap_or_default(),
        },
        overtime: game.overtime.unwrap_or(false),
        shootout: game.shootout.unwrap_or(false),
    }
}

fn game_team(side: StatnetGameTeam, state: GameState, logos: &LogoUrlTemplate) -> GameTeamInfo {
    let score = match state {
        GameState::NotStarted => None,
        GameState::Live | GameState::Finished => side.score.as_ref().and_then(score_value),
    };
    GameTeamInfo {
        team_info: team(&side.code, side.uuid.as_deref(), side.names, logos),
        score,
    }
}

fn score_value(score: &StatnetScore) -> Option<u32> {
    match score {
        StatnetScore::Number(n) => Some(*n),
        StatnetScore::Text(text) => text.trim().parse().ok(),
    }
}

/// Team identity from a code, the Statnet uuid and optional display names.
pub fn team(
    code: &str,
    uuid: Option<&str>,
    names: Option<StatnetTeamNames>,
    logos: &LogoUrlTemplate,
) -> TeamInfo {
    let names = names.unwrap_or_default();
    let code = first_non_empty(&[Some(code), names.code.as_deref()]).to_uppercase();
    let short = first_non_empty(&[names.short.as_deref(), Some(code.as_str())]);
    let long = first_non_empty(&[names.long.as_deref(), Some(short.as_str())]);
    let full = first_non_empty(&[names.full.as_deref(), Some(long.as_str())]);

    TeamInfo {
        code,
        external_id: uuid.unwrap_or_default().to_string(),
        short,
        long,
        full,
        logo: logos.render(uuid),
    }
}

fn team_ref(info: StatnetTeamRef, logos: &LogoUrlTemplate) -> TeamInfo {
    team(&info.code, info.uuid.as_deref(), info.team_names, logos)
}

fn columns(upstream: Vec<StatnetColumn>, fallback: fn() -> Vec<DataColumn>) -> Vec<DataColumn> {
    if upstream.is_empty() {
        return fallback();
    }
    upstream
        .into_iter()
        .map(|column| DataColumn {
            name: column.name,
            kind: column.kind.unwrap_or_else(|| "number".to_string()),
            highlighted: column.highlighted.unwrap_or(false),
        })
        .collect()
}

pub fn standings(table: StandingsTable, logos: &LogoUrlTemplate) -> StandingsReport {
    let stats = table
        .stats
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let goals_for = row.g.unwrap_or(0);
            let goals_against = row.ga.unwrap_or(0);
            TeamStats {
                rank: rank(index),
                info: team_ref(row.info, logos),
                games_played: row.gp.unwrap_or(0),
                wins: row.w.unwrap_or(0),
                losses: row.l.unwrap_or(0),
                ties: row.t.unwrap_or(0),
                overtime_wins: row.otw.unwrap_or(0),
                overtime_losses: row.otl.unwrap_or(0),
                goals_for,
                goals_against,
                goal_difference: row
                    .gd
                    .unwrap_or_else(|| goals_for as i32 - goals_against as i32),
                points: row.points.unwrap_or(0),
            }
        })
        .collect();

    StandingsReport {
        data_columns: columns(table.data_columns, standings_columns),
        stats,
    }
}

fn athlete(info: StatnetAthlete) -> PlayerInfo {
    PlayerInfo {
        external_id: info.uuid,
        first_name: info.first_name.unwrap_or_default(),
        last_name: info.last_name.unwrap_or_default(),
        jersey: info.jersey,
        position: info.position.unwrap_or_default(),
        nationality: info.nationality.unwrap_or_default(),
        team_code: info.team_code.unwrap_or_default().to_uppercase(),
        portrait: info.portrait_url.unwrap_or_default(),
    }
}

pub fn players(table: SkaterTable) -> PlayerReport {
    let stats = table
        .stats
        .into_iter()
        .enumerate()
        .map(|(index, row)| PlayerStats {
            rank: rank(index),
            info: athlete(row.info),
            games_played: row.gp.unwrap_or(0),
            goals: row.g.unwrap_or(0),
            assists: row.a.unwrap_or(0),
            points: row.tp.unwrap_or(0),
            penalty_minutes: row.pim.unwrap_or(0),
            plus_minus: row.plus_minus.unwrap_or(0),
        })
        .collect();

    PlayerReport {
        data_columns: columns(table.data_columns, player_columns),
        default_sort_key: table
            .default_sort_key
            .unwrap_or_else(|| PLAYER_SORT_KEY.to_string()),
        stats,
    }
}

pub fn goalies(table: GoalkeeperTable) -> GoalieReport {
    let stats = table
        .stats
        .into_iter()
        .enumerate()
        .map(|(index, row)| GoalieStats {
            rank: rank(index),
            info: athlete(row.info),
            games_played: row.gp.unwrap_or(0),
            saves: row.svs.unwrap_or(0),
            goals_against: row.ga.unwrap_or(0),
            goals_against_average: row.gaa.unwrap_or(0.0),
            save_percentage: row.svs_perc.unwrap_or(0.0),
            shutouts: row.so.unwrap_or(0),
        })
        .collect();

    GoalieReport {
        data_columns: columns(table.data_columns, goalie_columns),
        default_sort_key: table
            .default_sort_key
            .unwrap_or_else(|| GOALIE_SORT_KEY.to_string()),
        stats,
    }
}

/// Translate a whole schedule.
pub fn schedule(schedule: GameSchedule, ctx: &Translation<'_>) -> Vec<GameInfo> {
    schedule
        .game_info
        .into_iter()
        .map(|g| game(g, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn logos() -> LogoUrlTemplate {
        LogoUrlTemplate::new("https://logos.example.com/{id}.svg")
    }

    fn decode_game(value: serde_json::Value) -> StatnetGame {
        serde_json::from_value(value).unwrap()
    }

    fn ctx_at(logos: &LogoUrlTemplate, hour: u32) -> Translation<'_> {
        Translation {
            now: Utc.with_ymd_and_hms(2024, 10, 5, hour, 0, 0).unwrap(),
            logos,
        }
    }

    #[test]
    fn finished_game_translates_fully() {
        let logos = logos();
        let game = game(
            decode_game(json!({
                "uuid": "qZl-1",
                "startDateTime": "2024-10-05T15:15:00Z",
                "state": "post-game",
                "homeTeamInfo": {
                    "code": "lhf",
                    "uuid": "team-lhf",
                    "names": { "short": "Luleå", "long": "Luleå Hockey", "full": "Luleå Hockey Club" },
                    "score": 3
                },
                "awayTeamInfo": { "code": "FBK", "uuid": "team-fbk", "score": "2" },
                "venueInfo": { "name": "Coop Norrbotten Arena" },
                "overtime": true
            })),
            &ctx_at(&logos, 20),
        );

        assert_eq!(game.state, GameState::Finished);
        assert_eq!(game.home_team_info.team_info.code, "LHF");
        assert_eq!(game.home_team_info.team_info.full, "Luleå Hockey Club");
        assert_eq!(
            game.home_team_info.team_info.logo,
            "https://logos.example.com/team-lhf.svg"
        );
        assert_eq!(game.scores(), Some((3, 2)));
        assert_eq!(game.venue_info.name, "Coop Norrbotten Arena");
        assert!(game.overtime);
        assert!(!game.shootout);
    }

    #[test]
    fn required_fields_only_get_fallbacks() {
        let logos = logos();
        let game = game(
            decode_game(json!({
                "uuid": "qZl-2",
                "startDateTime": "2024-10-05T18:00:00Z",
                "homeTeamInfo": { "code": "LHF" },
                "awayTeamInfo": { "code": "FBK" }
            })),
            &ctx_at(&logos, 12),
        );

        assert_eq!(game.state, GameState::NotStarted);
        assert_eq!(game.home_team_info.team_info.logo, "");
        assert_eq!(game.home_team_info.team_info.external_id, "");
        assert_eq!(game.home_team_info.team_info.short, "LHF");
        assert_eq!(game.home_team_info.team_info.full, "LHF");
        assert_eq!(game.home_team_info.score, None);
        assert_eq!(game.venue_info.name, "");
        assert!(!game.overtime);
    }

    #[test]
    fn started_pre_game_becomes_live_with_score() {
        let logos = logos();
        let game = game(
            decode_game(json!({
                "uuid": "qZl-3",
                "startDateTime": "2024-10-05T18:00:00Z",
                "state": "pre-game",
                "homeTeamInfo": { "code": "LHF", "score": 1 },
                "awayTeamInfo": { "code": "FBK", "score": 0 }
            })),
            &ctx_at(&logos, 19),
        );

        assert_eq!(game.state, GameState::Live);
        assert_eq!(game.scores(), Some((1, 0)));
    }

    #[test]
    fn placeholder_scores_become_none() {
        let logos = logos();
        let game = game(
            decode_game(json!({
                "uuid": "qZl-4",
                "startDateTime": "2024-10-05T15:00:00Z",
                "state": "post-game",
                "homeTeamInfo": { "code": "LHF", "score": "N/A" },
                "awayTeamInfo": { "code": "FBK", "score": 2 }
            })),
            &ctx_at(&logos, 20),
        );

        assert_eq!(game.home_team_info.score, None);
        assert_eq!(game.away_team_info.score, Some(2));
        assert_eq!(game.scores(), None);
    }

    #[test]
    fn scheduled_game_drops_placeholder_zero() {
        let logos = logos();
        let game = game(
            decode_game(json!({
                "uuid": "qZl-5",
                "startDateTime": "2024-10-06T15:00:00Z",
                "state": "pre-game",
                "homeTeamInfo": { "code": "LHF", "score": 0 },
                "awayTeamInfo": { "code": "FBK", "score": 0 }
            })),
            &ctx_at(&logos, 20),
        );

        assert_eq!(game.state, GameState::NotStarted);
        assert_eq!(game.scores(), None);
    }

    #[test]
    fn standings_rank_follows_upstream_order() {
        let table: StandingsTable = serde_json::from_value(json!({
            "stats": [
                { "info": { "code": "FBK" }, "GP": 10, "Points": 12, "G": 20, "GA": 25 },
                { "info": { "code": "LHF", "uuid": "team-lhf" }, "GP": 10, "Points": 25, "GD": 9 }
            ]
        }))
        .unwrap();

        let report = standings(table, &logos());
        assert_eq!(report.stats[0].rank, Some(1));
        assert_eq!(report.stats[0].info.code, "FBK");
        // Rank is not recomputed from points
        assert_eq!(report.stats[1].rank, Some(2));
        assert_eq!(report.stats[0].goal_difference, -5);
        assert_eq!(report.stats[1].goal_difference, 9);
        assert_eq!(report.stats[1].info.logo, "https://logos.example.com/team-lhf.svg");
        assert_eq!(report.data_columns.len(), 9);
    }

    #[test]
    fn upstream_columns_pass_through() {
        let table: SkaterTable = serde_json::from_value(json!({
            "dataColumns": [{ "name": "TP", "type": "number", "highlighted": true }, { "name": "G" }],
            "defaultSortKey": "G",
            "stats": [{ "info": { "uuid": "p1", "firstName": "Anna", "teamCode": "lhf" }, "TP": 10 }]
        }))
        .unwrap();

        let report = players(table);
        assert_eq!(report.default_sort_key, "G");
        assert_eq!(report.data_columns.len(), 2);
        assert!(report.data_columns[0].highlighted);
        assert_eq!(report.data_columns[1].kind, "number");
        assert_eq!(report.stats[0].info.team_code, "LHF");
        assert_eq!(report.stats[0].info.last_name, "");
        assert_eq!(report.stats[0].points, 10);
    }

    #[test]
    fn goalie_defaults() {
        let table: GoalkeeperTable = serde_json::from_value(json!({
            "stats": [{ "info": { "uuid": "g1" } }]
        }))
        .unwrap();

        let report = goalies(table);
        assert_eq!(report.default_sort_key, GOALIE_SORT_KEY);
        assert_eq!(report.stats[0].rank, Some(1));
        assert_eq!(report.stats[0].save_percentage, 0.0);
        assert_eq!(report.stats[0].info.nationality, "");
    }

    #[test]
    fn schedule_keeps_upstream_order() {
        let logos = logos();
        let schedule_payload: GameSchedule = serde_json::from_value(json!({
            "gameInfo": [
                { "uuid": "b", "startDateTime": "2024-10-06T15:00:00Z",
                  "homeTeamInfo": { "code": "LHF" }, "awayTeamInfo": { "code": "FBK" } },
                { "uuid": "a", "startDateTime": "2024-10-05T15:00:00Z",
                  "homeTeamInfo": { "code": "FBK" }, "awayTeamInfo": { "code": "LHF" } }
            ]
        }))
        .unwrap();

        let games = schedule(schedule_payload, &ctx_at(&logos, 0));
        let uuids: Vec<&str> = games.iter().map(|g| g.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["b", "a"]);
    }
}
