//! CHL wire types. Every list endpoint wraps its rows in `{ "data": [...] }`.
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

pub type GameList = DataList<ChlGame>;
pub type StandingsList = DataList<ChlStandingsRow>;
pub type SkaterList = DataList<ChlSkaterRow>;
pub type GoalieList = DataList<ChlGoalieRow>;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlGame {
    pub id: String,
    pub start_date: DateTime<Utc>,
    /// "finished", "scheduled", "in-progress", ...
    pub status: Option<String>,
    pub teams: ChlMatchup,
    pub venue: Option<ChlVenue>,
    /// "REG", "OT" or "SO" once decided
    pub decision: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChlMatchup {
    pub home: ChlGameTeam,
    pub away: ChlGameTeam,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlGameTeam {
    #[serde(flatten)]
    pub team: ChlTeam,
    pub score: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlTeam {
    pub id: String,
    pub external_id: Option<String>,
    pub abbreviation: Option<String>,
    pub short_name: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChlVenue {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlStandingsRow {
    pub team: ChlTeam,
    pub games_played: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub overtime_wins: Option<u32>,
    pub overtime_losses: Option<u32>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub points: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlPlayer {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<u32>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlSkaterRow {
    pub player: ChlPlayer,
    pub team: Option<ChlTeam>,
    pub games_played: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub points: Option<u32>,
    pub penalty_minutes: Option<u32>,
    pub plus_minus: Option<i32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChlGoalieRow {
    pub player: ChlPlayer,
    pub team: Option<ChlTeam>,
    pub games_played: Option<u32>,
    pub saves: Option<u32>,
    pub goals_against: Option<u32>,
    pub goals_against_average: Option<f64>,
    pub save_percentage: Option<f64>,
    pub shutouts: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_team_flattens_team_fields() {
        let list: GameList = serde_json::from_value(json!({
            "data": [{
                "id": "chl-1",
                "startDate": "2024-09-05T17:00:00Z",
                "status": "finished",
                "teams": {
                    "home": { "id": "t1", "abbreviation": "fbk", "score": 2 },
                    "away": { "id": "t2", "abbreviation": "ev", "score": 3 }
                },
                "decision": "OT"
            }]
        }))
        .unwrap();

        let game = &list.data[0];
        assert_eq!(game.teams.home.team.abbreviation.as_deref(), Some("fbk"));
        assert_eq!(game.teams.away.score, Some(3));
        assert!(game.venue.is_none());
    }
}
