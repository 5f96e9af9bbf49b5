//! Reference data catalog.
//!
//! The catalog supplies the immutable lists the scheduler validates
//! against and renderers lay out: the teaching days, the fixed time slots
//! and the bookable rooms. It does not change during a scheduling session.

use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};
use crate::models::{Room, RoomType, TimeSlot, WeekDay};

/// Days, slots and rooms for one scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Teaching days, in grid order.
    #[serde(default = "default_days")]
    pub days: Vec<WeekDay>,
    /// Grid columns, in display order.
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<TimeSlot>,
    /// Bookable rooms.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
}

impl Catalog {
    /// Creates a catalog from explicit lists.
    pub fn new(days: Vec<WeekDay>, time_slots: Vec<TimeSlot>, rooms: Vec<Room>) -> Self {
        Self {
            days,
            time_slots,
            rooms,
        }
    }

    /// The standard faculty catalog: Monday to Saturday, eight one-hour slots
    /// from 09:00 to 16:00, and the eight campus rooms.
    pub fn standard() -> Self {
        Self::new(default_days(), default_time_slots(), default_rooms())
    }

    /// Teaching days.
    pub fn days(&self) -> &[WeekDay] {
        &self.days
    }

    /// Time slots.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Rooms.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a day by id or name.
    ///
    /// # Errors
    /// `UnknownDay` if the string is not a day or the day is not taught.
    pub fn day(&self, id: &str) -> TimetableResult<WeekDay> {
        let day: WeekDay = id.parse()?;
        self.ensure_day(day)?;
        Ok(day)
    }

    /// Confirms `day` is a teaching day in this catalog.
    pub fn ensure_day(&self, day: WeekDay) -> TimetableResult<()> {
        if self.days.contains(&day) {
            Ok(())
        } else {
            Err(TimetableError::UnknownDay(day.id().to_string()))
        }
    }

    /// Looks up a slot by id.
    pub fn slot(&self, id: &str) -> TimetableResult<&TimeSlot> {
        self.time_slots
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| TimetableError::UnknownSlot(id.to_string()))
    }

    /// Looks up a room by id or display name.
    pub fn room(&self, key: &str) -> TimetableResult<&Room> {
        self.rooms
            .iter()
            .find(|r| r.matches(key))
            .ok_or_else(|| TimetableError::UnknownRoom(key.to_string()))
    }

    /// Position of a slot in display order.
    pub fn slot_index(&self, id: &str) -> Option<usize> {
        self.time_slots.iter().position(|s| s.id == id)
    }

    /// Number of grid cells (days × slots).
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn default_days() -> Vec<WeekDay> {
    WeekDay::ALL.to_vec()
}

fn default_time_slots() -> Vec<TimeSlot> {
    (9..=16)
        .map(|hour: u32| {
            let twelve = |h: u32| if h > 12 { h - 12 } else { h };
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            TimeSlot::new(
                format!("{hour:02}:00"),
                format!("{:02}:00 {meridiem}", twelve(hour)),
                format!("{}:00 - {}:00", twelve(hour), twelve(hour + 1)),
            )
        })
        .collect()
}

fn default_rooms() -> Vec<Room> {
    vec![
        Room::classroom("room-101", "Room 101")
            .with_capacity(50)
            .with_building("A Block"),
        Room::classroom("room-102", "Room 102")
            .with_capacity(45)
            .with_building("A Block"),
        Room::classroom("room-205", "Room 205")
            .with_capacity(40)
            .with_building("B Block"),
        Room::classroom("room-301", "Room 301")
            .with_capacity(60)
            .with_building("C Block"),
        Room::lab("lab-201", "Lab 201")
            .with_capacity(30)
            .with_building("A Block"),
        Room::lab("lab-301", "Lab 301")
            .with_capacity(25)
            .with_building("C Block"),
        Room::new("seminar-hall", "Seminar Hall", RoomType::SeminarHall)
            .with_capacity(100)
            .with_building("Main Block"),
        Room::new("conference-room", "Conference Room", RoomType::MeetingRoom)
            .with_capacity(20)
            .with_building("Admin Block"),
    ]
}
