//! Thread-safe timetable handle.
//!
//! One [`SharedTimetable`] guards one timetable behind one mutex. Clones
//! share the same timetable; separately created handles never interact.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::Catalog;
use crate::conflict::SchedulingPolicy;
use crate::error::{AdmissionError, TimetableResult};
use crate::models::{ClassSession, SessionStatus, Timetable, WeekDay};
use crate::scheduler::{AnalyticsSnapshot, Scheduler};

/// A timetable with its catalog and policy, shareable across threads.
#[derive(Debug, Clone)]
pub struct SharedTimetable {
    catalog: Arc<Catalog>,
    policy: SchedulingPolicy,
    inner: Arc<Mutex<Timetable>>,
}

impl SharedTimetable {
    /// Wraps an empty timetable.
    pub fn new(catalog: Catalog) -> Self {
        Self::from_timetable(catalog, Timetable::new())
    }

    /// Wraps an existing timetable.
    pub fn from_timetable(catalog: Catalog, timetable: Timetable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            policy: SchedulingPolicy::default(),
            inner: Arc::new(Mutex::new(timetable)),
        }
    }

    /// Sets the admission policy for this handle.
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalog admissions are checked against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Admits a session under the lock. See [`Scheduler::add_session`].
    pub fn add_session(
        &self,
        day: WeekDay,
        slot: &str,
        session: ClassSession,
    ) -> Result<(), AdmissionError> {
        let mut timetable = self.lock();
        self.scheduler().add_session(&mut timetable, day, slot, session)
    }

    /// Applies a status transition under the lock.
    pub fn update_status(&self, session_id: &str, status: SessionStatus) -> TimetableResult<()> {
        let mut timetable = self.lock();
        self.scheduler().update_status(&mut timetable, session_id, status)
    }

    /// Analytics over a consistent view of the timetable.
    pub fn analytics(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot::compute(&self.lock(), &self.catalog)
    }

    /// A copy of the current timetable.
    pub fn snapshot(&self) -> Timetable {
        self.lock().clone()
    }

    /// Runs `f` with read access to the timetable while holding the lock.
    pub fn with_timetable<R>(&self, f: impl FnOnce(&Timetable) -> R) -> R {
        f(&*self.lock())
    }

    /// Reserves a fresh session id. See [`Timetable::next_session_id`].
    pub fn next_session_id(&self, day: WeekDay, slot: &str) -> String {
        self.lock().next_session_id(day, slot)
    }

    fn scheduler(&self) -> Scheduler<'_> {
        Scheduler::new(&self.catalog).with_policy(self.policy)
    }

    // A writer only mutates after admission succeeds, so a poisoned
    // timetable is still consistent.
    fn lock(&self) -> MutexGuard<'_, Timetable> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
