//! Timetable analytics.
//!
//! Computes the teaching-load summary shown next to the weekly grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total classes | Number of placed sessions |
//! | Total hours | Sum of duration / 60 |
//! | Total students | Sum of student counts |
//! | Average class size | Total students / total classes (0 if none) |
//! | Average daily hours | Total hours / catalog days (0 if none) |
//! | Daily load | Sessions and hours per day |
//! | Room utilization | Sessions per room, as a share of total classes |
//! | Class types | Sessions per [`ClassType`] |
//! | Statuses | Sessions per [`SessionStatus`] |
//! | Over capacity | Sessions with more students than their room seats |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::models::{ClassType, RoomType, SessionStatus, Timetable, WeekDay};

/// Derived teaching-load report.
///
/// Recomputed from scratch on every call; equal timetables give equal
/// snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Number of placed sessions.
    pub total_classes: usize,
    /// Teaching hours across the week.
    pub total_hours: f64,
    /// Students across all sessions.
    pub total_students: u64,
    /// Mean students per session (0.0 with no sessions).
    pub average_class_size: f64,
    /// Teaching hours per catalog day.
    pub average_daily_hours: f64,
    /// One entry per catalog day, in catalog order.
    pub daily_load: Vec<DayLoad>,
    /// One entry per catalog room, in catalog order.
    pub room_utilization: Vec<RoomUtilization>,
    /// Sessions per class type.
    pub class_types: BTreeMap<ClassType, usize>,
    /// Sessions per status.
    pub status_distribution: BTreeMap<SessionStatus, usize>,
    /// Sessions with more students than their room seats, in grid order.
    pub over_capacity: Vec<CapacityWarning>,
}

/// Load on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLoad {
    /// Grid row.
    pub day: WeekDay,
    /// Sessions placed on the day.
    pub classes: usize,
    /// Teaching hours on the day.
    pub hours: f64,
}

/// How much one room is used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomUtilization {
    /// Catalog room id.
    pub room_id: String,
    /// Display name.
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Building name.
    pub building: String,
    /// Sessions booked into the room.
    pub sessions: usize,
    /// `sessions / total_classes` (0.0..1.0).
    pub share: f64,
    /// `share` as a rounded percentage.
    pub percent: u32,
}

/// A session with more students than its room seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityWarning {
    /// The oversubscribed session.
    pub session_id: String,
    /// Day of the session's cell.
    pub day: WeekDay,
    /// Slot id of the session's cell.
    pub slot: String,
    /// Room display name.
    pub room: String,
    /// Students attending.
    pub students: u32,
    /// Seats in the room.
    pub capacity: u32,
}

impl AnalyticsSnapshot {
    /// Computes the snapshot for a timetable.
    ///
    /// Sessions are matched to catalog rooms by id or display name.
    /// Sessions on days outside the catalog still count towards the totals.
    pub fn compute(timetable: &Timetable, catalog: &Catalog) -> Self {
        let mut total_classes = 0usize;
        let mut total_minutes = 0u64;
        let mut total_students = 0u64;
        let mut per_day: BTreeMap<WeekDay, (usize, u64)> = BTreeMap::new();
        let mut per_room = vec![0usize; catalog.rooms().len()];
        let mut class_types = BTreeMap::new();
        let mut status_distribution = BTreeMap::new();
        let mut over_capacity = Vec::new();

        for placed in timetable.all_sessions() {
            let session = placed.session;
            total_classes += 1;
            total_minutes += u64::from(session.duration_minutes);
            total_students += u64::from(session.students);

            let day = per_day.entry(placed.day).or_insert((0, 0));
            day.0 += 1;
            day.1 += u64::from(session.duration_minutes);

            *class_types.entry(session.class_type).or_insert(0) += 1;
            *status_distribution.entry(session.status).or_insert(0) += 1;

            if let Some(idx) = catalog.rooms().iter().position(|r| r.matches(&session.room)) {
                per_room[idx] += 1;
                let room = &catalog.rooms()[idx];
                if !room.fits(session.students) {
                    over_capacity.push(CapacityWarning {
                        session_id: session.id.clone(),
                        day: placed.day,
                        slot: placed.slot.to_string(),
                        room: room.name.clone(),
                        students: session.students,
                        capacity: room.capacity,
                    });
                }
            }
        }

        let total_hours = minutes_to_hours(total_minutes);

        let average_class_size = if total_classes == 0 {
            0.0
        } else {
            total_students as f64 / total_classes as f64
        };

        let average_daily_hours = if catalog.days().is_empty() {
            0.0
        } else {
            total_hours / catalog.days().len() as f64
        };

        let daily_load = catalog
            .days()
            .iter()
            .map(|&day| {
                let (classes, minutes) = per_day.get(&day).copied().unwrap_or((0, 0));
                DayLoad {
                    day,
                    classes,
                    hours: minutes_to_hours(minutes),
                }
            })
            .collect();

        let room_utilization = catalog
            .rooms()
            .iter()
            .zip(per_room)
            .map(|(room, sessions)| {
                let share = if total_classes == 0 {
                    0.0
                } else {
                    sessions as f64 / total_classes as f64
                };
                RoomUtilization {
                    room_id: room.id.clone(),
                    name: room.name.clone(),
                    capacity: room.capacity,
                    room_type: room.room_type,
                    building: room.building.clone(),
                    sessions,
                    share,
                    percent: (share * 100.0).round() as u32,
                }
            })
            .collect();

        Self {
            total_classes,
            total_hours,
            total_students,
            average_class_size,
            average_daily_hours,
            daily_load,
            room_utilization,
            class_types,
            status_distribution,
            over_capacity,
        }
    }

    /// Load on one day, if it is a catalog day.
    pub fn day(&self, day: WeekDay) -> Option<&DayLoad> {
        self.daily_load.iter().find(|d| d.day == day)
    }

    /// Utilization of one room, by id or display name.
    pub fn room(&self, key: &str) -> Option<&RoomUtilization> {
        self.room_utilization
            .iter()
            .find(|r| r.room_id == key || r.name == key)
    }

    /// Sessions of one class type.
    pub fn class_type_count(&self, class_type: ClassType) -> usize {
        self.class_types.get(&class_type).copied().unwrap_or(0)
    }
}

fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassSession;

    fn session(
        id: &str,
        room: &str,
        class_type: ClassType,
        students: u32,
        minutes: u32,
    ) -> ClassSession {
        ClassSession::new(id, "Subject", "CS301-A", room, class_type)
            .with_students(students)
            .with_duration(minutes)
    }

    #[test]
    fn test_empty_timetable() {
        let snap = AnalyticsSnapshot::compute(&Timetable::new(), &Catalog::standard());
        assert_eq!(snap.total_classes, 0);
        assert!((snap.total_hours - 0.0).abs() < 1e-10);
        assert!((snap.average_class_size - 0.0).abs() < 1e-10);
        assert!((snap.average_daily_hours - 0.0).abs() < 1e-10);
        assert_eq!(snap.daily_load.len(), 6);
        assert!(snap.daily_load.iter().all(|d| d.classes == 0));
        assert_eq!(snap.room_utilization.len(), 8);
        assert!(snap.room_utilization.iter().all(|r| r.percent == 0));
        assert!(snap.class_types.is_empty());
        assert!(snap.over_capacity.is_empty());
    }

    #[test]
    fn test_daily_load_hours() {
        let mut t = Timetable::new();
        t.put(WeekDay::Monday, "09:00", session("a", "Room 101", ClassType::Lecture, 30, 60));
        t.put(WeekDay::Monday, "10:00", session("b", "Room 102", ClassType::Workshop, 20, 90));
        t.put(WeekDay::Monday, "13:00", session("c", "Lab 201", ClassType::Lab, 25, 120));

        let snap = AnalyticsSnapshot::compute(&t, &Catalog::standard());
        let monday = snap.day(WeekDay::Monday).unwrap();
        assert_eq!(monday.classes, 3);
        assert!((monday.hours - 4.5).abs() < 1e-10);
        assert_eq!(snap.day(WeekDay::Tuesday).unwrap().classes, 0);

        assert!((snap.total_hours - 4.5).abs() < 1e-10);
        assert!((snap.average_daily_hours - 0.75).abs() < 1e-10); // 4.5 / 6
        assert_eq!(snap.total_students, 75);
        assert!((snap.average_class_size - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_room_share_and_types() {
        let mut t = Timetable::new();
        t.put(WeekDay::Monday, "09:00", session("a", "Room 101", ClassType::Lecture, 30, 60));
        t.put(WeekDay::Tuesday, "09:00", session("b", "room-101", ClassType::Lecture, 30, 60));
        t.put(WeekDay::Tuesday, "10:00", session("c", "Lab 201", ClassType::Lab, 25, 120));

        let snap = AnalyticsSnapshot::compute(&t, &Catalog::standard());
        let room = snap.room("Room 101").unwrap();
        assert_eq!(room.sessions, 2);
        assert!((room.share - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(room.percent, 67);
        assert_eq!(snap.room("lab-201").unwrap().percent, 33);
        assert_eq!(snap.room("Seminar Hall").unwrap().sessions, 0);

        assert_eq!(snap.class_type_count(ClassType::Lecture), 2);
        assert_eq!(snap.class_type_count(ClassType::Lab), 1);
        assert_eq!(snap.class_type_count(ClassType::Meeting), 0);
        assert_eq!(snap.status_distribution[&SessionStatus::Scheduled], 3);
    }

    #[test]
    fn test_over_capacity_reported() {
        let mut t = Timetable::new();
        t.put(WeekDay::Monday, "11:00", session("lab", "Lab 201", ClassType::Lab, 35, 120));
        t.put(WeekDay::Monday, "14:00", session("ok", "Room 205", ClassType::Lecture, 28, 60));

        let snap = AnalyticsSnapshot::compute(&t, &Catalog::standard());
        assert_eq!(
            snap.over_capacity,
            vec![CapacityWarning {
                session_id: "lab".into(),
                day: WeekDay::Monday,
                slot: "11:00".into(),
                room: "Lab 201".into(),
                students: 35,
                capacity: 30,
            }]
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut t = Timetable::new();
        t.put(WeekDay::Friday, "11:00", session("a", "Room 301", ClassType::Lecture, 25, 60));
        let c = Catalog::standard();
        assert_eq!(
            AnalyticsSnapshot::compute(&t, &c),
            AnalyticsSnapshot::compute(&t, &c)
        );
    }

    #[test]
    fn test_no_catalog_days() {
        let mut t = Timetable::new();
        t.put(WeekDay::Monday, "09:00", session("a", "Room 101", ClassType::Lecture, 30, 60));
        let c = Catalog::new(vec![], Catalog::standard().time_slots, Catalog::standard().rooms);

        let snap = AnalyticsSnapshot::compute(&t, &c);
        assert_eq!(snap.total_classes, 1);
        assert!(snap.daily_load.is_empty());
        assert!((snap.average_daily_hours - 0.0).abs() < 1e-10);
    }
}
