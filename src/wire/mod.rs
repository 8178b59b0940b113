//! Provider-native payloads.
//!
//! Each resource has one enum with a variant per provider family, so the
//! translators have to handle every provider explicitly.

pub mod chl;
pub mod statnet;

#[derive(Debug, Clone)]
pub enum GamesPayload {
    Statnet(statnet::GameSchedule),
    Chl(chl::GameList),
}

#[derive(Debug, Clone)]
pub enum StandingsPayload {
    Statnet(statnet::StandingsTable),
    Chl(chl::StandingsList),
}

#[derive(Debug, Clone)]
pub enum PlayersPayload {
    Statnet(statnet::SkaterTable),
    Chl(chl::SkaterList),
}

#[derive(Debug, Clone)]
pub enum GoaliesPayload {
    Statnet(statnet::GoalkeeperTable),
    Chl(chl::GoalieList),
}

impl GamesPayload {
    pub fn len(&self) -> usize {
        match self {
            GamesPayload::Statnet(schedule) => schedule.game_info.len(),
            GamesPayload::Chl(list) => list.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StandingsPayload {
    pub fn len(&self) -> usize {
        match self {
            StandingsPayload::Statnet(table) => table.stats.len(),
            StandingsPayload::Chl(list) => list.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlayersPayload {
    pub fn len(&self) -> usize {
        match self {
            PlayersPayload::Statnet(table) => table.stats.len(),
            PlayersPayload::Chl(list) => list.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GoaliesPayload {
    pub fn len(&self) -> usize {
        match self {
            GoaliesPayload::Statnet(table) => table.stats.len(),
            GoaliesPayload::Chl(list) => list.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
