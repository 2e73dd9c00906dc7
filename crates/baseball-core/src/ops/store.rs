use std::collections::HashMap;

use crate::errors::{BaseballError, EntityKind, Result};
use crate::model::{Game, Park, Team};
use crate::txlog::TransactionLog;

/// In-memory store for parks, teams and games
///
/// Parks are keyed by id, teams by name, and games are kept in insertion
/// order. Not thread-safe (no Arc/RwLock); callers serialize access.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) parks: HashMap<String, Park>,
    pub(crate) teams: HashMap<String, Team>,
    pub(crate) games: Vec<Game>,
    pub(crate) tx_log: TransactionLog,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn park(&self, id: &str) -> Option<&Park> {
        self.parks.get(id)
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    /// Get a park that a game refers to
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the park doesn't exist.
    pub fn get_park(&self, id: &str) -> Result<&Park> {
        self.parks
            .get(id)
            .ok_or_else(|| BaseballError::ReferenceNotFound {
                kind: EntityKind::Park,
                id: id.to_string(),
            })
    }

    /// Get a team that a game refers to
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the team doesn't exist.
    pub fn get_team(&self, name: &str) -> Result<&Team> {
        self.teams
            .get(name)
            .ok_or_else(|| BaseballError::ReferenceNotFound {
                kind: EntityKind::Team,
                id: name.to_string(),
            })
    }

    /// All parks, sorted by id
    pub fn parks(&self) -> Vec<&Park> {
        let mut parks: Vec<&Park> = self.parks.values().collect();
        parks.sort_by(|a, b| a.id.cmp(&b.id));
        parks
    }

    /// All teams, sorted by name
    pub fn teams(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.values().collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams
    }

    /// Games in insertion order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn transaction_log(&self) -> &TransactionLog {
        &self.tx_log
    }

    /// Add a park unless one with the same id exists
    ///
    /// Loader used by bulk ingestion and test setup; bypasses commands and
    /// the transaction log. Returns whether the park was added.
    pub fn load_park(&mut self, park: Park) -> bool {
        if self.parks.contains_key(&park.id) {
            return false;
        }
        self.parks.insert(park.id.clone(), park);
        true
    }

    /// Add a team unless one with the same name exists
    ///
    /// Returns whether the team was added.
    pub fn load_team(&mut self, team: Team) -> bool {
        if self.teams.contains_key(&team.name) {
            return false;
        }
        self.teams.insert(team.name.clone(), team);
        true
    }

    /// Append a game without any duplicate check
    pub fn load_game(&mut self, game: Game) {
        self.games.push(game);
    }
}
