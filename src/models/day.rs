//! Week day model.
//!
//! The timetable grid has one row per teaching day. The set is closed
//! (Monday through Saturday) and its declaration order is the grid order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

/// A teaching day of the week.
///
/// Ordering follows the grid layout: `Monday < Tuesday < ... < Saturday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All days in grid order.
    pub const ALL: [WeekDay; 6] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Stable lowercase identifier (e.g., `"monday"`).
    pub fn id(self) -> &'static str {
        match self {
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
        }
    }

    /// Full display name (e.g., `"Monday"`).
    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
        }
    }

    /// Short display label (e.g., `"Mon"`).
    pub fn short(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WeekDay {
    type Err = TimetableError;

    /// Accepts the id or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        WeekDay::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| TimetableError::UnknownDay(s.to_string()))
    }
}
