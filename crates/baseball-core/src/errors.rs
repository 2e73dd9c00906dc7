use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using BaseballError
pub type Result<T> = std::result::Result<T, BaseballError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// depending on the shape of individual error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Descriptor / parsing
    MissingArgument,
    InvalidFormat,
    UnrecognizedVerb,
    UnrecognizedCollection,
    UnsupportedOperation,

    // Store
    NotFound,
    Multiplicity,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingArgument => "ERR_MISSING_ARGUMENT",
            ExErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ExErrorKind::UnrecognizedVerb => "ERR_UNRECOGNIZED_VERB",
            ExErrorKind::UnrecognizedCollection => "ERR_UNRECOGNIZED_COLLECTION",
            ExErrorKind::UnsupportedOperation => "ERR_UNSUPPORTED_OPERATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Multiplicity => "ERR_MULTIPLICITY",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context, and is what the
/// logging macros and the ingestion layer report.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Kind of record a failed lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Park,
    Team,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Park => "park",
            EntityKind::Team => "team",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by command construction and execution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BaseballError {
    // ===== Descriptor Errors =====
    /// A required key is absent from a descriptor's arguments
    #[error("Missing argument '{key}' for '{command}'")]
    MissingArgument { command: String, key: String },

    /// A value is present but does not parse as its semantic type
    #[error("Invalid value '{value}' for '{key}': expected {expected}")]
    FormatError {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Unrecognized verb: {verb}")]
    UnrecognizedVerb { verb: String },

    #[error("Unrecognized collection '{collection}' for verb '{verb}'")]
    UnrecognizedCollection { verb: String, collection: String },

    /// Recognized verb with no implementation (delete)
    #[error("Unsupported operation: {verb}")]
    UnsupportedOperation { verb: String },

    // ===== Store Errors =====
    /// A game referenced a park or team that is not in the store
    #[error("{kind} not found: {id}")]
    ReferenceNotFound { kind: EntityKind, id: String },

    /// Update match key selected zero or several games
    #[error("Expected exactly one game on {date} ({home} vs {visitor}), found {matches}")]
    Multiplicity {
        date: NaiveDate,
        home: String,
        visitor: String,
        matches: usize,
    },
}

impl BaseballError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            BaseballError::MissingArgument { .. } => ExErrorKind::MissingArgument,
            BaseballError::FormatError { .. } => ExErrorKind::InvalidFormat,
            BaseballError::UnrecognizedVerb { .. } => ExErrorKind::UnrecognizedVerb,
            BaseballError::UnrecognizedCollection { .. } => ExErrorKind::UnrecognizedCollection,
            BaseballError::UnsupportedOperation { .. } => ExErrorKind::UnsupportedOperation,
            BaseballError::ReferenceNotFound { .. } => ExErrorKind::NotFound,
            BaseballError::Multiplicity { .. } => ExErrorKind::Multiplicity,
        }
    }

    pub(crate) fn format(key: &str, value: &str, expected: &'static str) -> Self {
        BaseballError::FormatError {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

/// Conversion from BaseballError to ExError
impl From<BaseballError> for ExError {
    fn from(err: BaseballError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            BaseballError::MissingArgument { command, .. } => ExError::new(kind)
                .with_op(command)
                .with_message(message),

            BaseballError::FormatError { key, .. } => ExError::new(kind)
                .with_entity_id(key)
                .with_message(message),

            BaseballError::UnrecognizedVerb { verb }
            | BaseballError::UnsupportedOperation { verb } => ExError::new(kind)
                .with_op(verb)
                .with_message(message),

            BaseballError::UnrecognizedCollection { verb, .. } => ExError::new(kind)
                .with_op(verb)
                .with_message(message),

            BaseballError::ReferenceNotFound { id, .. } => ExError::new(kind)
                .with_entity_id(id)
                .with_message(message),

            BaseballError::Multiplicity { home, visitor, .. } => ExError::new(kind)
                .with_op("update_game")
                .with_entity_id(format!("{}@{}", visitor, home))
                .with_message(message),
        }
    }
}
