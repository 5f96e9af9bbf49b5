//! Timetable domain models.
//!
//! Provides the data types for a single teaching week: the grid axes
//! (days and slots), the rooms sessions are booked into, the sessions
//! themselves and the grid that holds them.
//!
//! # Grid Layout
//!
//! |          | 09:00 | 10:00 | ... | 16:00 |
//! |----------|-------|-------|-----|-------|
//! | Monday   | cell  | cell  |     | cell  |
//! | ...      |       |       |     |       |
//! | Saturday | cell  | cell  |     | cell  |
//!
//! Each cell holds zero or one [`ClassSession`].

mod day;
mod room;
mod session;
mod slot;
mod timetable;

pub use day::WeekDay;
pub use room::{Room, RoomType};
pub use session::{ClassSession, ClassType, SessionStatus, DEFAULT_DURATION_MINUTES};
pub use slot::{parse_clock, TimeSlot, TimeWindow};
pub use timetable::{Placement, Timetable};
