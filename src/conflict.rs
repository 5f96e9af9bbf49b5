//! Placement conflict checks.
//!
//! Decides whether a candidate session may be placed into a (day, slot)
//! cell. The checks are independent and all of them run, so the caller
//! can show every problem at once:
//!
//! | Check | Scope | Message |
//! |-------|-------|---------|
//! | Slot occupancy | target cell | `Time slot {slot} on {day} is already occupied.` |
//! | Room occupancy | same day, any slot | `Room {room} is already booked at {slot} on {day}.` |
//! | Capacity (opt-in) | candidate only | `Room {room} holds {capacity} students; session needs {students}.` |
//!
//! # Room check modes
//!
//! [`RoomCheck::SlotExact`] (the default) only compares slot ids: a
//! 120-minute lab at 09:00 does not block its room at 10:00.
//! [`RoomCheck::DurationAware`] compares the minute intervals the sessions
//! actually occupy.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{ClassSession, Timetable, WeekDay};

/// Conflict check result.
pub type ConflictResult = Result<(), Vec<Conflict>>;

/// One reason a placement is not admissible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of placement conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The target cell already holds a session.
    SlotOccupied,
    /// The room is already booked at that time on that day.
    RoomDoubleBooked,
    /// More students than the room seats.
    CapacityExceeded,
}

impl Conflict {
    /// Creates a conflict.
    pub fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// How room occupancy is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomCheck {
    /// Same room and same slot id.
    #[default]
    SlotExact,
    /// Same room and overlapping `[start, start + duration)` intervals.
    DurationAware,
}

/// Rules applied on admission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    /// Room occupancy comparison.
    #[serde(default)]
    pub room_check: RoomCheck,
    /// Reject sessions with more students than the room seats.
    #[serde(default)]
    pub enforce_capacity: bool,
}

impl SchedulingPolicy {
    /// Sets the room check mode.
    pub fn with_room_check(mut self, room_check: RoomCheck) -> Self {
        self.room_check = room_check;
        self
    }

    /// Enables or disables capacity enforcement.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }
}

/// Checks whether `session` may be placed at (`day`, `slot`).
///
/// Does not validate references; the caller has already resolved the day,
/// slot and room against the catalog.
///
/// # Returns
/// `Ok(())` if admissible, `Err(conflicts)` with every detected conflict.
pub fn check_placement(
    timetable: &Timetable,
    catalog: &Catalog,
    policy: &SchedulingPolicy,
    day: WeekDay,
    slot: &str,
    session: &ClassSession,
) -> ConflictResult {
    let mut conflicts = Vec::new();

    if timetable.is_occupied(day, slot) {
        conflicts.push(Conflict::new(
            ConflictKind::SlotOccupied,
            format!("Time slot {slot} on {day} is already occupied."),
        ));
    }

    for placed in timetable.day_sessions(day) {
        if placed.session.room != session.room {
            continue;
        }
        let clash = match policy.room_check {
            RoomCheck::SlotExact => placed.slot == slot,
            RoomCheck::DurationAware => {
                let candidate_window = catalog
                    .slot(slot)
                    .ok()
                    .and_then(|s| s.window(session.duration_minutes));
                let placed_window = catalog
                    .slot(placed.slot)
                    .ok()
                    .and_then(|s| s.window(placed.session.duration_minutes));
                match (candidate_window, placed_window) {
                    (Some(a), Some(b)) => a.overlaps(&b),
                    // Without clock times fall back to slot identity.
                    _ => placed.slot == slot,
                }
            }
        };
        if clash {
            conflicts.push(Conflict::new(
                ConflictKind::RoomDoubleBooked,
                format!(
                    "Room {} is already booked at {slot} on {day}.",
                    session.room
                ),
            ));
            // One report per room, however many sessions it overlaps.
            break;
        }
    }

    if policy.enforce_capacity {
        if let Ok(room) = catalog.room(&session.room) {
            if !room.fits(session.students) {
                conflicts.push(Conflict::new(
                    ConflictKind::CapacityExceeded,
                    format!(
                        "Room {} holds {} students; session needs {}.",
                        session.room, room.capacity, session.students
                    ),
                ));
            }
        }
    }

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(conflicts)
    }
}
