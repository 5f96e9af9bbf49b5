//! Session admission and timetable analytics.
//!
//! # Admission
//!
//! [`Scheduler`] is the only writer of a [`Timetable`](crate::models::Timetable).
//! It resolves references against the catalog, runs the conflict checks and
//! commits atomically.
//!
//! # Analytics
//!
//! [`AnalyticsSnapshot`] is a read-only pass over a timetable: totals,
//! per-day load, room utilization and class-type distribution.

mod admission;
mod analytics;

pub use crate::conflict::{RoomCheck, SchedulingPolicy};
pub use admission::Scheduler;
pub use analytics::{AnalyticsSnapshot, CapacityWarning, DayLoad, RoomUtilization};
