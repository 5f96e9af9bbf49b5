//! Session admission.
//!
//! # Algorithm
//!
//! 1. Resolve the day, slot and room against the catalog (fail fast).
//! 2. Validate the session's required fields.
//! 3. Run every conflict check against the current timetable.
//! 4. Commit only when no conflict was found.
//!
//! Admission is atomic: a rejected request leaves the timetable untouched.

use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::conflict::{check_placement, SchedulingPolicy};
use crate::error::{AdmissionError, TimetableError, TimetableResult};
use crate::models::{ClassSession, SessionStatus, Timetable, WeekDay};

/// Single entry point for mutating a timetable.
///
/// Borrows the catalog for reference checks; the timetable is passed in
/// explicitly on every call.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{ClassSession, ClassType, Timetable, WeekDay};
/// use u_timetable::scheduler::Scheduler;
///
/// let catalog = Catalog::standard();
/// let scheduler = Scheduler::new(&catalog);
/// let mut timetable = Timetable::new();
///
/// let lecture = ClassSession::new(
///     "mon-09",
///     "Machine Learning",
///     "CS301-A",
///     "Room 101",
///     ClassType::Lecture,
/// )
/// .with_students(35);
/// scheduler.add_session(&mut timetable, WeekDay::Monday, "09:00", lecture).unwrap();
///
/// let again = ClassSession::new(
///     "mon-09b",
///     "Data Science",
///     "CS401-A",
///     "Room 205",
///     ClassType::Lecture,
/// );
/// let err = scheduler.add_session(&mut timetable, WeekDay::Monday, "09:00", again).unwrap_err();
/// assert_eq!(err.conflict_messages(), vec!["Time slot 09:00 on monday is already occupied."]);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<'a> {
    catalog: &'a Catalog,
    policy: SchedulingPolicy,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler with the default (slot-exact) policy.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            policy: SchedulingPolicy::default(),
        }
    }

    /// Sets the admission policy.
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalog this scheduler checks against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The admission policy.
    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Admits `session` into the (`day`, `slot`) cell.
    ///
    /// The session's room reference is normalized to the room's display
    /// name before it is stored, so a session that named its room by id is
    /// stored with a different `room` field than the one passed in.
    ///
    /// # Errors
    /// - `AdmissionError::Reference` for an unknown day, slot or room, or a
    ///   session missing required fields.
    /// - `AdmissionError::Conflicts` with every conflict found. Nothing is
    ///   written in either case.
    pub fn add_session(
        &self,
        timetable: &mut Timetable,
        day: WeekDay,
        slot: &str,
        session: ClassSession,
    ) -> Result<(), AdmissionError> {
        let session = self.check(timetable, day, slot, session)?;

        if let Ok(room) = self.catalog.room(&session.room) {
            if !room.fits(session.students) {
                warn!(
                    "Session '{}' has {} students but {} seats {}",
                    session.id, session.students, room.name, room.capacity
                );
            }
        }

        info!(
            "Scheduled '{}' ({} {}) in {} at {slot} on {day}",
            session.id, session.subject, session.section, session.room
        );
        timetable.put(day, slot, session);
        Ok(())
    }

    /// Same as [`add_session`](Self::add_session), with the day given by
    /// id or name (e.g., from a form field).
    pub fn add_session_by_id(
        &self,
        timetable: &mut Timetable,
        day: &str,
        slot: &str,
        session: ClassSession,
    ) -> Result<(), AdmissionError> {
        let day = self.catalog.day(day)?;
        self.add_session(timetable, day, slot, session)
    }

    /// Runs every admission check without committing.
    ///
    /// Returns the session as it would be stored.
    pub fn check(
        &self,
        timetable: &Timetable,
        day: WeekDay,
        slot: &str,
        mut session: ClassSession,
    ) -> Result<ClassSession, AdmissionError> {
        debug!("Checking '{}' at {slot} on {day}", session.id);

        self.catalog.ensure_day(day)?;
        self.catalog.slot(slot)?;
        session.validate()?;
        let room = self.catalog.room(&session.room)?;
        if session.room != room.name {
            session.room = room.name.clone();
        }

        match check_placement(timetable, self.catalog, &self.policy, day, slot, &session) {
            Ok(()) => Ok(session),
            Err(conflicts) => {
                debug!(
                    "Rejected '{}' at {slot} on {day}: {} conflict(s)",
                    session.id,
                    conflicts.len()
                );
                Err(AdmissionError::Conflicts(conflicts))
            }
        }
    }

    /// Moves a committed session to a new status.
    ///
    /// Setting the current status again is a no-op.
    ///
    /// # Errors
    /// - `UnknownSession` if no session has that id.
    /// - `InvalidStatusTransition` if the lifecycle forbids the move.
    pub fn update_status(
        &self,
        timetable: &mut Timetable,
        session_id: &str,
        status: SessionStatus,
    ) -> TimetableResult<()> {
        let session = timetable
            .find_mut(session_id)
            .ok_or_else(|| TimetableError::UnknownSession(session_id.to_string()))?;

        if session.status == status {
            return Ok(());
        }
        if !session.status.can_transition_to(status) {
            return Err(TimetableError::InvalidStatusTransition {
                id: session_id.to_string(),
                from: session.status,
                to: status,
            });
        }

        info!("Session '{session_id}': {} -> {status}", session.status);
        session.status = status;
        Ok(())
    }
}
