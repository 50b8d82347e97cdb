//! Validation errors.
//!
//! Every entity kind has its own variant so callers can match on the kind
//! of failure instead of parsing messages.

use crate::EntityKind;
use std::fmt;
use thiserror::Error;

/// The details of a single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The first offending field, if the failure is field-specific.
    pub field: Option<String>,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A validation failure, tagged with the entity kind that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user validation error: {0}")]
    User(Violation),

    #[error("profile validation error: {0}")]
    Profile(Violation),

    #[error("session validation error: {0}")]
    Session(Violation),

    #[error("post validation error: {0}")]
    Post(Violation),

    #[error("event validation error: {0}")]
    Event(Violation),

    #[error("image validation error: {0}")]
    Image(Violation),

    #[error("file validation error: {0}")]
    File(Violation),

    #[error("message validation error: {0}")]
    Message(Violation),

    #[error("reaction validation error: {0}")]
    Reaction(Violation),

    #[error("tag validation error: {0}")]
    Tag(Violation),

    #[error("location validation error: {0}")]
    Location(Violation),

    #[error("content validation error: {0}")]
    Content(Violation),

    #[error("translation validation error: {0}")]
    Translation(Violation),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Builds the error variant for `kind`.
    pub fn new(kind: EntityKind, field: Option<&str>, message: impl Into<String>) -> Self {
        let violation = Violation {
            field: field.map(str::to_string),
            message: message.into(),
        };
        match kind {
            EntityKind::User => Self::User(violation),
            EntityKind::Profile => Self::Profile(violation),
            EntityKind::Session => Self::Session(violation),
            EntityKind::Post => Self::Post(violation),
            EntityKind::Event => Self::Event(violation),
            EntityKind::Image => Self::Image(violation),
            EntityKind::File => Self::File(violation),
            EntityKind::Message => Self::Message(violation),
            EntityKind::Reaction => Self::Reaction(violation),
            EntityKind::Tag => Self::Tag(violation),
            EntityKind::Location => Self::Location(violation),
            EntityKind::Content => Self::Content(violation),
            EntityKind::Translation => Self::Translation(violation),
        }
    }

    /// Shorthand for a field-specific failure.
    pub fn field(kind: EntityKind, field: &str, message: impl Into<String>) -> Self {
        Self::new(kind, Some(field), message)
    }

    /// The entity kind whose validator produced this error.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Profile(_) => EntityKind::Profile,
            Self::Session(_) => EntityKind::Session,
            Self::Post(_) => EntityKind::Post,
            Self::Event(_) => EntityKind::Event,
            Self::Image(_) => EntityKind::Image,
            Self::File(_) => EntityKind::File,
            Self::Message(_) => EntityKind::Message,
            Self::Reaction(_) => EntityKind::Reaction,
            Self::Tag(_) => EntityKind::Tag,
            Self::Location(_) => EntityKind::Location,
            Self::Content(_) => EntityKind::Content,
            Self::Translation(_) => EntityKind::Translation,
        }
    }

    #[must_use]
    pub fn violation(&self) -> &Violation {
        match self {
            Self::User(v)
            | Self::Profile(v)
            | Self::Session(v)
            | Self::Post(v)
            | Self::Event(v)
            | Self::Image(v)
            | Self::File(v)
            | Self::Message(v)
            | Self::Reaction(v)
            | Self::Tag(v)
            | Self::Location(v)
            | Self::Content(v)
            | Self::Translation(v) => v,
        }
    }

    /// The first offending field, or `None` for record-level failures.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.violation().field.as_deref()
    }

    /// Human-readable description, without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.violation().message
    }
}
