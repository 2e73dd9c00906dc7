//! Command execution
//!
//! [`apply`] is the single dispatcher from a [`Command`] to the store
//! operation implementing it. [`Store::execute`] wraps it with logging and
//! transaction-log bookkeeping and is the entry point callers should use.
//!
//! ## Transaction semantics
//!
//! Every command takes effect immediately. While a transaction is open,
//! each successful mutation is also recorded in the log, so:
//! - `Commit` re-applies every recorded mutation once more, in order;
//! - `Rollback` drops all but the first recorded entry and undoes nothing.
//!
//! ## Example
//!
//! ```
//! use baseball_core::{Command, League, Store};
//!
//! let mut store = Store::new();
//! store.execute(Command::Begin).unwrap();
//! store
//!     .execute(Command::InsertTeam {
//!         team_id: "BOS".to_string(),
//!         league: League::AL,
//!     })
//!     .unwrap();
//!
//! assert!(store.team("BOS").is_some());
//! assert_eq!(store.transaction_log().len(), 1);
//! ```

use std::time::Instant;

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{game_ops, park_ops, team_ops, Store};
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply a command to the store without touching the transaction log
///
/// # Errors
///
/// Returns whatever error the underlying operation reports; see
/// [`BaseballError`](crate::errors::BaseballError) for the taxonomy.
pub fn apply(store: &mut Store, cmd: &Command) -> Result<()> {
    match cmd {
        Command::InsertPark { park_id } => park_ops::insert_park(store, park_id),

        Command::InsertTeam { team_id, league } => team_ops::insert_team(store, team_id, *league),

        Command::InsertGame { game } => game_ops::insert_game(store, game),

        Command::UpdatePark { park_id } => park_ops::update_park(store, park_id),

        Command::UpdateTeam { team_id, league } => team_ops::update_team(store, team_id, *league),

        Command::UpdateGame {
            key,
            park_id,
            home_score,
            visitor_score,
            attendance,
        } => game_ops::update_game(
            store,
            key,
            park_id,
            *home_score,
            *visitor_score,
            *attendance,
        ),

        Command::Begin => {
            store.tx_log.begin();
            Ok(())
        }

        Command::Commit => commit(store),

        Command::Rollback => {
            let removed = store.tx_log.rollback();
            tracing::debug!(op = "rollback", removed, log_len = store.tx_log.len());
            Ok(())
        }
    }
}

/// Replay every logged command, in log order
///
/// Stops at the first failing entry. The log itself is left as it was.
fn commit(store: &mut Store) -> Result<()> {
    let entries = store.tx_log.entries().to_vec();
    tracing::debug!(op = "commit", log_len = entries.len());
    for entry in &entries {
        apply(store, entry)?;
    }
    Ok(())
}

impl Store {
    /// Execute one command
    ///
    /// Applies the command immediately and, if it is a successful mutation
    /// while a transaction is open, appends it to the transaction log.
    ///
    /// # Errors
    ///
    /// Surfaces the operation's error unchanged; a failed command is not
    /// logged.
    pub fn execute(&mut self, cmd: Command) -> Result<()> {
        let op = cmd.name();
        let target = cmd.target().unwrap_or_default();
        let start = Instant::now();
        log_op_start!(op, command = op, entity = target.as_str());

        match apply(self, &cmd) {
            Ok(()) => {
                if cmd.is_mutation() {
                    self.tx_log.record(cmd);
                }
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    entity = target.as_str(),
                    log_len = self.tx_log.len()
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    op,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    entity = target.as_str()
                );
                Err(err)
            }
        }
    }
}
