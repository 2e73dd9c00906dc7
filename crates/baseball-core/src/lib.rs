//! Baseball Core - in-memory game record store
//!
//! This crate provides the data model and the command/query kernel:
//! - Park, Team and Game records held by a single in-memory [`Store`]
//! - Typed commands built from generic command descriptors
//! - A begin/commit/rollback transaction log over executed commands
//! - Composable filters evaluated lazily over the game collection
//!
//! Everything is synchronous and single-threaded; callers embedding the
//! store in a multi-threaded host must serialize access themselves.

pub mod apply;
pub mod commands;
pub mod dates;
pub mod descriptor;
pub mod errors;
pub mod factory;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod txlog;

#[doc(hidden)]
pub use baseball_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use descriptor::{Args, CommandDescriptor};
pub use errors::{BaseballError, EntityKind, ExError, ExErrorKind, Result};
pub use model::{Game, GameKey, League, Park, Team};
pub use ops::Store;
pub use queries::{Filter, Query};
pub use txlog::TransactionLog;
