//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the emitting macros
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_PARK_ID: &str = "park_id";
pub const FIELD_TEAM_ID: &str = "team_id";
pub const FIELD_GAME_DATE: &str = "game_date";

// Command / transaction fields
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_LOG_LEN: &str = "log_len";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Ingestion counters
pub const FIELD_IMPORTED: &str = "imported";
pub const FIELD_SKIPPED: &str = "skipped";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
