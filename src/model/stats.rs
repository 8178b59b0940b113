use serde::{Deserialize, Serialize};

use super::team::TeamInfo;

/// Column metadata shipped with every stats report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub highlighted: bool,
}

impl DataColumn {
    pub fn number(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "number".to_string(),
            highlighted: false,
        }
    }

    pub fn highlighted(name: &str) -> Self {
        Self {
            highlighted: true,
            ..Self::number(name)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub external_id: String,
    pub first_name: String,
    pub last_name: String,
    pub jersey: Option<u32>,
    pub position: String,
    pub nationality: String,
    pub team_code: String,
    pub portrait: String,
}

/// Standings row. `rank` reflects upstream order, not the counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    #[serde(rename = "Rank")]
    pub rank: Option<u32>,
    pub info: TeamInfo,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "T")]
    pub ties: u32,
    #[serde(rename = "OTW")]
    pub overtime_wins: u32,
    #[serde(rename = "OTL")]
    pub overtime_losses: u32,
    #[serde(rename = "G")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GD")]
    pub goal_difference: i32,
    #[serde(rename = "Points")]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "Rank")]
    pub rank: Option<u32>,
    pub info: PlayerInfo,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "G")]
    pub goals: u32,
    #[serde(rename = "A")]
    pub assists: u32,
    #[serde(rename = "TP")]
    pub points: u32,
    #[serde(rename = "PIM")]
    pub penalty_minutes: u32,
    #[serde(rename = "+/-")]
    pub plus_minus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalieStats {
    #[serde(rename = "Rank")]
    pub rank: Option<u32>,
    pub info: PlayerInfo,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "SVS")]
    pub saves: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GAA")]
    pub goals_against_average: f64,
    #[serde(rename = "SVSPerc")]
    pub save_percentage: f64,
    #[serde(rename = "SO")]
    pub shutouts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsReport {
    pub data_columns: Vec<DataColumn>,
    pub stats: Vec<TeamStats>,
}

impl StandingsReport {
    /// Teams in standings order, first occurrence of each code wins.
    pub fn teams(&self) -> Vec<TeamInfo> {
        let mut teams: Vec<TeamInfo> = Vec::with_capacity(self.stats.len());
        for row in &self.stats {
            if !teams.iter().any(|t| t.has_code(&row.info.code)) {
                teams.push(row.info.clone());
            }
        }
        teams
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub data_columns: Vec<DataColumn>,
    pub default_sort_key: String,
    pub stats: Vec<PlayerStats>,
}

impl PlayerReport {
    /// Rows for a single team. Ranks keep their league-wide values.
    pub fn for_team(&self, code: &str) -> PlayerReport {
        PlayerReport {
            data_columns: self.data_columns.clone(),
            default_sort_key: self.default_sort_key.clone(),
            stats: self
                .stats
                .iter()
                .filter(|row| row.info.team_code.eq_ignore_ascii_case(code))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieReport {
    pub data_columns: Vec<DataColumn>,
    pub default_sort_key: String,
    pub stats: Vec<GoalieStats>,
}

impl GoalieReport {
    /// Rows for a single team. Ranks keep their league-wide values.
    pub fn for_team(&self, code: &str) -> GoalieReport {
        GoalieReport {
            data_columns: self.data_columns.clone(),
            default_sort_key: self.default_sort_key.clone(),
            stats: self
                .stats
                .iter()
                .filter(|row| row.info.team_code.eq_ignore_ascii_case(code))
                .cloned()
                .collect(),
        }
    }
}
