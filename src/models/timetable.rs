//! Timetable (store) model.
//!
//! A timetable is the weekly grid of (day × slot) cells, each holding at
//! most one [`ClassSession`]. It owns every session record.
//!
//! The store does not validate writes. Admission (conflict checking) is the
//! [`Scheduler`](crate::scheduler::Scheduler)'s job, and it is the only
//! caller of [`Timetable::put`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClassSession, WeekDay};

/// The weekly grid: day → slot id → session.
///
/// Iteration is deterministic: days in week order, slots in id order
/// (`HH:MM` ids sort chronologically).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    cells: BTreeMap<WeekDay, BTreeMap<String, ClassSession>>,
    /// Sequence for generated session ids.
    #[serde(default)]
    next_seq: u64,
}

/// A session together with the cell it is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    /// Grid row.
    pub day: WeekDay,
    /// Grid column (slot id).
    pub slot: &'a str,
    /// The session in the cell.
    pub session: &'a ClassSession,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// The session in a cell, if any.
    pub fn get(&self, day: WeekDay, slot: &str) -> Option<&ClassSession> {
        self.cells.get(&day).and_then(|row| row.get(slot))
    }

    /// Whether a cell holds a session.
    pub fn is_occupied(&self, day: WeekDay, slot: &str) -> bool {
        self.get(day, slot).is_some()
    }

    /// Writes a session into a cell, unconditionally.
    ///
    /// Callers must have confirmed the cell is empty.
    pub(crate) fn put(&mut self, day: WeekDay, slot: impl Into<String>, session: ClassSession) {
        self.cells
            .entry(day)
            .or_default()
            .insert(slot.into(), session);
    }

    /// Mutable access to a session by id (for status updates).
    pub(crate) fn find_mut(&mut self, session_id: &str) -> Option<&mut ClassSession> {
        self.cells
            .values_mut()
            .flat_map(|row| row.values_mut())
            .find(|s| s.id == session_id)
    }

    /// All placed sessions, in grid order.
    pub fn all_sessions(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.cells.iter().flat_map(|(&day, row)| {
            row.iter().map(move |(slot, session)| Placement {
                day,
                slot: slot.as_str(),
                session,
            })
        })
    }

    /// Sessions on one day, in slot order.
    pub fn day_sessions(&self, day: WeekDay) -> Vec<Placement<'_>> {
        self.cells
            .get(&day)
            .map(|row| {
                row.iter()
                    .map(|(slot, session)| Placement {
                        day,
                        slot: slot.as_str(),
                        session,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Finds a session by id.
    pub fn find(&self, session_id: &str) -> Option<Placement<'_>> {
        self.all_sessions().find(|p| p.session.id == session_id)
    }

    /// All sessions booked into a room.
    pub fn sessions_in_room(&self, room: &str) -> Vec<Placement<'_>> {
        self.all_sessions()
            .filter(|p| p.session.room == room)
            .collect()
    }

    /// Sessions whose subject, section or room contains `term`
    /// (case-insensitive). An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<Placement<'_>> {
        let term = term.trim();
        self.all_sessions()
            .filter(|p| term.is_empty() || p.session.matches_term(term))
            .collect()
    }

    /// Number of placed sessions.
    pub fn len(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    /// Whether no session is placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generates a session id of the form `{day}-{slot}-{n}`.
    ///
    /// `n` increases monotonically per timetable, so ids never repeat.
    pub fn next_session_id(&mut self, day: WeekDay, slot: &str) -> String {
        self.next_seq += 1;
        format!("{}-{}-{}", day.id(), slot, self.next_seq)
    }
}
