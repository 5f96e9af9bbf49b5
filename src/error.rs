//! Error types.
//!
//! Two kinds of failure come out of this crate:
//!
//! | Kind | Type | Meaning |
//! |------|------|---------|
//! | Reference | [`TimetableError`] | Caller bug: unknown day/slot/room/session, malformed session. Never retried. |
//! | Conflict | [`AdmissionError::Conflicts`] | Expected outcome: the placement is not admissible. The user fixes the request and resubmits. |
//!
//! Configuration loading has its own [`ConfigError`].

use crate::conflict::Conflict;
use crate::models::SessionStatus;
use crate::validation::ValidationError;

/// Result type for reference-checked operations.
pub type TimetableResult<T> = Result<T, TimetableError>;

/// Reference and construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Invalid session '{id}': {reason}")]
    InvalidSession { id: String, reason: String },

    #[error("Session '{id}' cannot move from {from} to {to}")]
    InvalidStatusTransition {
        id: String,
        from: SessionStatus,
        to: SessionStatus,
    },
}

/// Why a session was not admitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdmissionError {
    /// The request references something the catalog does not know.
    #[error(transparent)]
    Reference(#[from] TimetableError),

    /// The placement collides with the current timetable.
    #[error("{} scheduling conflict(s): {}", .0.len(), join_messages(.0))]
    Conflicts(Vec<Conflict>),
}

impl AdmissionError {
    /// The conflicts, if this is a conflict rejection.
    pub fn conflicts(&self) -> Option<&[Conflict]> {
        match self {
            AdmissionError::Conflicts(c) => Some(c),
            AdmissionError::Reference(_) => None,
        }
    }

    /// Human-readable conflict descriptions (empty for reference errors).
    pub fn conflict_messages(&self) -> Vec<String> {
        self.conflicts()
            .map(|c| c.iter().map(|c| c.message.clone()).collect())
            .unwrap_or_default()
    }

    /// Whether this is a caller error rather than a scheduling conflict.
    pub fn is_reference(&self) -> bool {
        matches!(self, AdmissionError::Reference(_))
    }
}

fn join_messages(conflicts: &[Conflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {}", join_validation(.0))]
    InvalidCatalog(Vec<ValidationError>),
}
