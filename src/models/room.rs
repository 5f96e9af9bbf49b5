//! Room model.
//!
//! Rooms are the resources a class session occupies. Each room has a
//! seating capacity, a type and the building it sits in. Rooms are static
//! reference data owned by the [`Catalog`](crate::catalog::Catalog).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (e.g., `"lab-201"`).
    pub id: String,
    /// Display name, which sessions reference (e.g., `"Lab 201"`).
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Building name.
    #[serde(default)]
    pub building: String,
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    /// General lecture room.
    Classroom,
    /// Room with workstations.
    ComputerLab,
    /// Large hall for workshops and seminars.
    SeminarHall,
    /// Small room for staff meetings.
    MeetingRoom,
}

impl Room {
    /// Creates a room with no seats and no building.
    pub fn new(id: impl Into<String>, name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: 0,
            room_type,
            building: String::new(),
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RoomType::Classroom)
    }

    /// Creates a computer lab.
    pub fn lab(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RoomType::ComputerLab)
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Whether `key` names this room, by id or by display name.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key
    }

    /// Whether `students` fit in this room.
    pub fn fits(&self, students: u32) -> bool {
        students <= self.capacity
    }
}

impl RoomType {
    /// Display label (e.g., `"Computer Lab"`).
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Classroom => "Classroom",
            RoomType::ComputerLab => "Computer Lab",
            RoomType::SeminarHall => "Seminar Hall",
            RoomType::MeetingRoom => "Meeting Room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
