//! Transaction log
//!
//! The log records commands that have *already been applied* since the last
//! `Begin`. It is never a staging area: `Commit` replays the recorded
//! commands a second time and `Rollback` only prunes the record, leaving
//! every applied mutation in place.

use crate::commands::Command;

/// Two-state transaction log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransactionLog {
    /// No transaction has been opened
    #[default]
    Idle,
    /// Accumulating executed mutations since the last `Begin`
    Open(Vec<Command>),
}

impl TransactionLog {
    /// Enter the open state with an empty log, discarding any prior entries
    pub fn begin(&mut self) {
        *self = TransactionLog::Open(Vec::new());
    }

    /// Append an executed command; ignored while idle
    pub fn record(&mut self, cmd: Command) {
        if let TransactionLog::Open(entries) = self {
            entries.push(cmd);
        }
    }

    /// Keep only the first entry. Returns how many entries were removed.
    pub fn rollback(&mut self) -> usize {
        match self {
            TransactionLog::Open(entries) => {
                let removed = entries.len().saturating_sub(1);
                entries.truncate(1);
                removed
            }
            TransactionLog::Idle => 0,
        }
    }

    pub fn entries(&self) -> &[Command] {
        match self {
            TransactionLog::Open(entries) => entries,
            TransactionLog::Idle => &[],
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TransactionLog::Open(_))
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(id: &str) -> Command {
        Command::InsertPark {
            park_id: id.to_string(),
        }
    }

    #[test]
    fn test_idle_ignores_records() {
        let mut log = TransactionLog::default();
        log.record(park("A"));
        assert!(!log.is_open());
        assert!(log.is_empty());
    }

    #[test]
    fn test_begin_resets() {
        let mut log = TransactionLog::default();
        log.begin();
        log.record(park("A"));
        assert_eq!(log.len(), 1);

        log.begin();
        assert!(log.is_open());
        assert!(log.is_empty());
    }

    #[test]
    fn test_rollback_keeps_first_entry() {
        let mut log = TransactionLog::default();
        log.begin();
        log.record(park("A"));
        log.record(park("B"));
        log.record(park("C"));

        assert_eq!(log.rollback(), 2);
        assert_eq!(log.entries(), &[park("A")]);
        assert!(log.is_open());
    }

    #[test]
    fn test_rollback_on_empty_or_idle_log() {
        let mut log = TransactionLog::default();
        assert_eq!(log.rollback(), 0);

        log.begin();
        assert_eq!(log.rollback(), 0);
        assert!(log.is_empty());
    }
}
