//! Error handling for baseball-store
//!
//! Wraps baseball-core ExError with ingestion-specific helpers

use baseball_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a record validation error
pub fn record_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidFormat)
        .with_op("gamelog_parse")
        .with_message(reason.to_string())
}

/// Create an error for a record the CSV reader could not decode
pub fn from_csv(err: csv::Error) -> ExError {
    let message = match err.position() {
        Some(pos) => format!("line {}: {}", pos.line(), err),
        None => err.to_string(),
    };
    ExError::new(ExErrorKind::InvalidFormat)
        .with_op("gamelog_read")
        .with_message(message)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
