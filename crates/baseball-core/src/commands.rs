//! Command types representing every operation the store executes
//!
//! Commands are built from descriptors by the [`factory`](crate::factory)
//! and executed through [`Store::execute`](crate::Store::execute).

use crate::model::{Game, GameKey, League};

/// Closed set of typed store operations
///
/// Update variants carry `Option` fields; `None` leaves the stored value
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a park if absent
    InsertPark { park_id: String },

    /// Create a team if absent; an existing team is left untouched
    InsertTeam { team_id: String, league: League },

    /// Append a game unless a structurally equal game already exists
    InsertGame { game: Game },

    /// No-op beyond validating the park id
    UpdatePark { park_id: String },

    /// Overwrite an existing team's league when one is supplied
    UpdateTeam {
        team_id: String,
        league: Option<League>,
    },

    /// Update the single game matching `key`
    UpdateGame {
        key: GameKey,
        park_id: String,
        home_score: Option<u32>,
        visitor_score: Option<u32>,
        attendance: Option<u32>,
    },

    /// Open a transaction log, discarding any previous one
    Begin,

    /// Replay the transaction log against the store
    Commit,

    /// Prune the transaction log down to its first entry
    Rollback,
}

impl Command {
    /// Stable operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertPark { .. } => "insert_park",
            Command::InsertTeam { .. } => "insert_team",
            Command::InsertGame { .. } => "insert_game",
            Command::UpdatePark { .. } => "update_park",
            Command::UpdateTeam { .. } => "update_team",
            Command::UpdateGame { .. } => "update_game",
            Command::Begin => "begin",
            Command::Commit => "commit",
            Command::Rollback => "rollback",
        }
    }

    /// Whether this command mutates entities (and so belongs in the log)
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::Begin | Command::Commit | Command::Rollback)
    }

    /// Short description of the record a mutation targets
    pub fn target(&self) -> Option<String> {
        match self {
            Command::InsertPark { park_id } | Command::UpdatePark { park_id } => {
                Some(format!("park:{}", park_id))
            }
            Command::InsertTeam { team_id, .. } | Command::UpdateTeam { team_id, .. } => {
                Some(format!("team:{}", team_id))
            }
            Command::InsertGame { game } => Some(format!(
                "game:{}:{}@{}",
                game.date, game.visitor_team_id, game.home_team_id
            )),
            Command::UpdateGame { key, .. } => Some(format!(
                "game:{}:{}@{}",
                key.date, key.visitor_team_id, key.home_team_id
            )),
            Command::Begin | Command::Commit | Command::Rollback => None,
        }
    }
}
