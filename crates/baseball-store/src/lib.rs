//! Baseball Store - game-log ingestion
//!
//! Provides:
//! - Positional parser for comma-separated game-log records
//! - Best-effort bulk import of game-log files and directories into a
//!   [`Store`](baseball_core::Store)

pub mod errors;
pub mod gamelog;

// Re-export key types
pub use errors::Result;
pub use gamelog::{
    import_gamelog_dir, import_gamelog_file, import_gamelogs, parse_record, GameLogRecord,
    ImportSummary,
};
