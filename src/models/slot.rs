//! Time slot and time window models.
//!
//! A slot is one fixed column of the weekly grid, identified by its
//! `HH:MM` start time. The nominal width is one hour, but sessions anchored
//! to a slot may run longer.
//!
//! # Time Model
//! Times within a day are minutes since midnight. Windows are half-open,
//! so a session ending at 10:00 does not overlap one starting at 10:00.

use serde::{Deserialize, Serialize};

/// A fixed column in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier, the `HH:MM` start time (e.g., `"09:00"`).
    pub id: String,
    /// Clock display (e.g., `"09:00 AM"`).
    pub time: String,
    /// Range display (e.g., `"9:00 - 10:00"`).
    pub label: String,
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(id: impl Into<String>, time: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            label: label.into(),
        }
    }

    /// Start of the slot in minutes since midnight.
    ///
    /// Returns `None` if the id is not a valid `HH:MM` time.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_clock(&self.id)
    }

    /// The window a session of `duration_minutes` occupies when anchored here.
    ///
    /// The end saturates at `u32::MAX`, so an oversized duration runs to the
    /// end of the time axis.
    pub fn window(&self, duration_minutes: u32) -> Option<TimeWindow> {
        self.start_minutes()
            .map(|start| TimeWindow::new(start, start.saturating_add(duration_minutes)))
    }
}

/// Parses `HH:MM` (24-hour) into minutes since midnight.
pub fn parse_clock(value: &str) -> Option<u32> {
    let (h, m) = value.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// A time interval [start, end) within a day, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minutes, inclusive).
    pub start: u32,
    /// Interval end (minutes, exclusive).
    pub end: u32,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of this window (minutes).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("09:00"), Some(540));
        assert_eq!(parse_clock("16:30"), Some(990));
        assert_eq!(parse_clock("00:00"), Some(0));
        assert_eq!(parse_clock("9:00"), None);
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("noon"), None);
    }

    #[test]
    fn test_slot_window() {
        let slot = TimeSlot::new("09:00", "09:00 AM", "9:00 - 10:00");
        assert_eq!(slot.start_minutes(), Some(540));

        let w = slot.window(120).unwrap();
        assert_eq!(w, TimeWindow::new(540, 660));
        assert_eq!(w.duration(), 120);

        let bad = TimeSlot::new("morning", "", "");
        assert!(bad.window(60).is_none());
    }

    #[test]
    fn test_slot_window_saturates() {
        let slot = TimeSlot::new("09:00", "09:00 AM", "9:00 - 10:00");
        let w = slot.window(u32::MAX).unwrap();
        assert_eq!(w, TimeWindow::new(540, u32::MAX));
        assert!(w.overlaps(&TimeWindow::new(900, 960)));
    }

    #[test]
    fn test_window_overlap() {
        let lab = TimeWindow::new(540, 660); // 09:00-11:00
        let ten = TimeWindow::new(600, 660); // 10:00-11:00
        let eleven = TimeWindow::new(660, 720); // 11:00-12:00

        assert!(lab.overlaps(&ten));
        assert!(ten.overlaps(&lab));
        assert!(!lab.overlaps(&eleven)); // Half-open: touching is not overlapping
    }
}
