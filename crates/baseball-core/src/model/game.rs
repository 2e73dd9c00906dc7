use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single game record
///
/// Teams and park are referenced by key; the store guarantees the referenced
/// records exist. Two games are the same record iff every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub date: NaiveDate,
    pub home_team_id: String,
    pub visitor_team_id: String,
    pub home_score: u32,
    pub visitor_score: u32,
    pub park_id: String,
    pub attendance: u32,
}

impl Game {
    /// Whether this game is the one identified by `key`
    pub fn matches_key(&self, key: &GameKey) -> bool {
        self.date == key.date
            && self.home_team_id == key.home_team_id
            && self.visitor_team_id == key.visitor_team_id
    }

    pub fn key(&self) -> GameKey {
        GameKey {
            date: self.date,
            home_team_id: self.home_team_id.clone(),
            visitor_team_id: self.visitor_team_id.clone(),
        }
    }
}

/// Match key used by game updates: date plus both team names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameKey {
    pub date: NaiveDate,
    pub home_team_id: String,
    pub visitor_team_id: String,
}

impl GameKey {
    pub fn new(
        date: NaiveDate,
        home_team_id: impl Into<String>,
        visitor_team_id: impl Into<String>,
    ) -> Self {
        Self {
            date,
            home_team_id: home_team_id.into(),
            visitor_team_id: visitor_team_id.into(),
        }
    }
}
