//! Class session model.
//!
//! A class session is one scheduled class occurrence: a subject taught to a
//! section in a room for a given duration. Sessions are anchored to exactly
//! one (day, slot) cell of the [`Timetable`](super::Timetable).
//!
//! # Lifecycle
//!
//! ```text
//! Scheduled ──► InProgress ──► Completed
//!     │              │
//!     └──────────────┴──────► Cancelled
//! ```
//!
//! Once admitted, only the status of a session changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimetableError;

/// Default session length (minutes).
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// A scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Unique session identifier.
    pub id: String,
    /// Subject name (e.g., "Machine Learning").
    pub subject: String,
    /// Section identifier (e.g., "CS301-A").
    pub section: String,
    /// Assigned room, by display name or id.
    pub room: String,
    /// Kind of class.
    pub class_type: ClassType,
    /// Number of students attending.
    pub students: u32,
    /// Actual length (minutes). May exceed the one-hour slot width.
    pub duration_minutes: u32,
    /// Lifecycle status.
    pub status: SessionStatus,
}

/// Kind of class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassType {
    Lecture,
    Lab,
    Tutorial,
    Workshop,
    Meeting,
}

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Admitted, not yet started.
    Scheduled,
    /// Currently running.
    InProgress,
    /// Finished (terminal).
    Completed,
    /// Called off (terminal).
    Cancelled,
}

impl ClassSession {
    /// Creates a scheduled session with no students and the default duration.
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        section: impl Into<String>,
        room: impl Into<String>,
        class_type: ClassType,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            section: section.into(),
            room: room.into(),
            class_type,
            students: 0,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            status: SessionStatus::Scheduled,
        }
    }

    /// Sets the student count.
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }

    /// Sets the duration (minutes).
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    /// Duration in hours (fractional).
    #[inline]
    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }

    /// Checks required fields.
    ///
    /// # Errors
    /// `InvalidSession` if the id, subject or room is blank, or the
    /// duration is zero.
    pub fn validate(&self) -> Result<(), TimetableError> {
        let reason = if self.id.trim().is_empty() {
            "id is empty"
        } else if self.subject.trim().is_empty() {
            "subject is empty"
        } else if self.room.trim().is_empty() {
            "room is empty"
        } else if self.duration_minutes == 0 {
            "duration must be positive"
        } else {
            return Ok(());
        };

        Err(TimetableError::InvalidSession {
            id: self.id.clone(),
            reason: reason.to_string(),
        })
    }

    /// Case-insensitive match on subject, section or room.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.subject, &self.section, &self.room]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl ClassType {
    /// All class types, in display order.
    pub const ALL: [ClassType; 5] = [
        ClassType::Lecture,
        ClassType::Lab,
        ClassType::Tutorial,
        ClassType::Workshop,
        ClassType::Meeting,
    ];
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl SessionStatus {
    /// Whether no further transition is allowed.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SessionStatus) -> bool {
        use SessionStatus::*;
        matches!(
            (self, next),
            (Scheduled, InProgress)
                | (Scheduled, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
