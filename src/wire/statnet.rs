//! Statnet wire types, as served by the SHL and SDHL deployments.
//!
//! Required fields are plain; everything the provider omits from time to
//! time is an `Option` and gets a fallback in the translator.
use chrono::{DateTime, Utc};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Game schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameSchedule {
    pub game_info: Vec<StatnetGame>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatnetGame {
    pub uuid: String,
    pub start_date_time: DateTime<Utc>,
    /// "pre-game", "live", "post-game", ...
    pub state: Option<String>,
    pub home_team_info: StatnetGameTeam,
    pub away_team_info: StatnetGameTeam,
    pub venue_info: Option<StatnetVenue>,
    pub overtime: Option<bool>,
    pub shootout: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatnetGameTeam {
    pub code: String,
    pub uuid: Option<String>,
    pub names: Option<StatnetTeamNames>,
    pub score: Option<StatnetScore>,
}

/// Scores arrive as numbers, numeric strings or placeholders like "N/A".
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatnetScore {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatnetTeamNames {
    pub code: Option<String>,
    pub short: Option<String>,
    pub long: Option<String>,
    pub full: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatnetVenue {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Stats tables (standings, skaters, goalkeepers)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatnetColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub highlighted: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StandingsTable {
    #[serde(default)]
    pub data_columns: Vec<StatnetColumn>,
    pub stats: Vec<StatnetStandingsRow>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatnetTeamRef {
    pub code: String,
    pub uuid: Option<String>,
    pub team_names: Option<StatnetTeamNames>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatnetStandingsRow {
    pub info: StatnetTeamRef,
    #[serde(rename = "GP")]
    pub gp: Option<u32>,
    #[serde(rename = "W")]
    pub w: Option<u32>,
    #[serde(rename = "L")]
    pub l: Option<u32>,
    #[serde(rename = "T")]
    pub t: Option<u32>,
    #[serde(rename = "OTW")]
    pub otw: Option<u32>,
    #[serde(rename = "OTL")]
    pub otl: Option<u32>,
    #[serde(rename = "G")]
    pub g: Option<u32>,
    #[serde(rename = "GA")]
    pub ga: Option<u32>,
    #[serde(rename = "GD")]
    pub gd: Option<i32>,
    #[serde(rename = "Points")]
    pub points: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AthleteTable<R> {
    #[serde(default)]
    pub data_columns: Vec<StatnetColumn>,
    pub default_sort_key: Option<String>,
    pub stats: Vec<R>,
}

pub type SkaterTable = AthleteTable<StatnetSkaterRow>;
pub type GoalkeeperTable = AthleteTable<StatnetGoalkeeperRow>;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatnetAthlete {
    pub uuid: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey: Option<u32>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub team_code: Option<String>,
    pub portrait_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatnetSkaterRow {
    pub info: StatnetAthlete,
    #[serde(rename = "GP")]
    pub gp: Option<u32>,
    #[serde(rename = "G")]
    pub g: Option<u32>,
    #[serde(rename = "A")]
    pub a: Option<u32>,
    #[serde(rename = "TP")]
    pub tp: Option<u32>,
    #[serde(rename = "PIM")]
    pub pim: Option<u32>,
    #[serde(rename = "+/-")]
    pub plus_minus: Option<i32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatnetGoalkeeperRow {
    pub info: StatnetAthlete,
    #[serde(rename = "GP")]
    pub gp: Option<u32>,
    #[serde(rename = "SVS")]
    pub svs: Option<u32>,
    #[serde(rename = "GA")]
    pub ga: Option<u32>,
    #[serde(rename = "GAA")]
    pub gaa: Option<f64>,
    #[serde(rename = "SVSPerc")]
    pub svs_perc: Option<f64>,
    #[serde(rename = "SO")]
    pub so: Option<u32>,
}
