//! Core types shared across the baseball crates
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility and by tests that assert on captured events

pub mod schema;
