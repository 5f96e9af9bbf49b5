//! Reference week.
//!
//! A populated faculty timetable for demos and tests: three course
//! sections, their labs and a Saturday faculty meeting.

use crate::catalog::Catalog;
use crate::error::AdmissionError;
use crate::models::{ClassSession, ClassType, Timetable, WeekDay};
use crate::scheduler::Scheduler;

struct SampleRow {
    day: WeekDay,
    slot: &'static str,
    id: &'static str,
    subject: &'static str,
    section: &'static str,
    room: &'static str,
    class_type: ClassType,
    students: u32,
    minutes: u32,
}

const SAMPLE_WEEK: [SampleRow; 11] = [
    SampleRow {
        day: WeekDay::Monday,
        slot: "09:00",
        id: "mon-09",
        subject: "Machine Learning",
        section: "CS301-A",
        room: "Room 101",
        class_type: ClassType::Lecture,
        students: 35,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Monday,
        slot: "11:00",
        id: "mon-11",
        subject: "Machine Learning Lab",
        section: "CS301-A",
        room: "Lab 201",
        class_type: ClassType::Lab,
        students: 35,
        minutes: 120,
    },
    SampleRow {
        day: WeekDay::Monday,
        slot: "14:00",
        id: "mon-14",
        subject: "Data Science",
        section: "CS401-A",
        room: "Room 205",
        class_type: ClassType::Lecture,
        students: 28,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Tuesday,
        slot: "10:00",
        id: "tue-10",
        subject: "Advanced AI",
        section: "CS501-A",
        room: "Room 301",
        class_type: ClassType::Lecture,
        students: 25,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Tuesday,
        slot: "13:00",
        id: "tue-13",
        subject: "Machine Learning",
        section: "CS301-B",
        room: "Room 102",
        class_type: ClassType::Lecture,
        students: 32,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Wednesday,
        slot: "09:00",
        id: "wed-09",
        subject: "Data Science Lab",
        section: "CS401-A",
        room: "Lab 301",
        class_type: ClassType::Lab,
        students: 28,
        minutes: 120,
    },
    SampleRow {
        day: WeekDay::Wednesday,
        slot: "15:00",
        id: "wed-15",
        subject: "Advanced AI Workshop",
        section: "CS501-A",
        room: "Seminar Hall",
        class_type: ClassType::Workshop,
        students: 25,
        minutes: 90,
    },
    SampleRow {
        day: WeekDay::Thursday,
        slot: "10:00",
        id: "thu-10",
        subject: "Machine Learning",
        section: "CS301-A",
        room: "Room 101",
        class_type: ClassType::Tutorial,
        students: 35,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Thursday,
        slot: "14:00",
        id: "thu-14",
        subject: "Data Science",
        section: "CS401-A",
        room: "Room 205",
        class_type: ClassType::Lecture,
        students: 28,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Friday,
        slot: "11:00",
        id: "fri-11",
        subject: "Advanced AI",
        section: "CS501-A",
        room: "Room 301",
        class_type: ClassType::Lecture,
        students: 25,
        minutes: 60,
    },
    SampleRow {
        day: WeekDay::Saturday,
        slot: "09:00",
        id: "sat-09",
        subject: "Faculty Meeting",
        section: "All Faculty",
        room: "Conference Room",
        class_type: ClassType::Meeting,
        students: 0,
        minutes: 120,
    },
];

/// Builds the reference week, admitting every session through the
/// [`Scheduler`] with the default policy.
///
/// # Errors
/// Fails if `catalog` lacks a day, slot or room the week uses.
pub fn sample_week(catalog: &Catalog) -> Result<Timetable, AdmissionError> {
    let scheduler = Scheduler::new(catalog);
    let mut timetable = Timetable::new();

    for row in &SAMPLE_WEEK {
        let session = ClassSession::new(row.id, row.subject, row.section, row.room, row.class_type)
            .with_students(row.students)
            .with_duration(row.minutes);
        scheduler.add_session(&mut timetable, row.day, row.slot, session)?;
    }

    Ok(timetable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimetableError;
    use crate::scheduler::AnalyticsSnapshot;

    #[test]
    fn test_sample_week_admits_everything() {
        let t = sample_week(&Catalog::standard()).unwrap();
        assert_eq!(t.len(), 11);
        assert_eq!(
            t.get(WeekDay::Monday, "11:00").unwrap().subject,
            "Machine Learning Lab"
        );
        assert_eq!(t.day_sessions(WeekDay::Saturday).len(), 1);
    }

    #[test]
    fn test_sample_week_analytics() {
        let catalog = Catalog::standard();
        let snap = AnalyticsSnapshot::compute(&sample_week(&catalog).unwrap(), &catalog);

        assert_eq!(snap.total_classes, 11);
        // 7 × 60 + 3 × 120 + 90 = 870 minutes
        assert!((snap.total_hours - 14.5).abs() < 1e-10);
        assert_eq!(snap.total_students, 296);
        assert!((snap.average_class_size - 296.0 / 11.0).abs() < 1e-10);
        assert!((snap.day(WeekDay::Monday).unwrap().hours - 4.0).abs() < 1e-10);
        assert_eq!(snap.room("Room 101").unwrap().sessions, 2);
        assert_eq!(snap.room("Room 101").unwrap().percent, 18);
        assert_eq!(snap.class_type_count(ClassType::Lecture), 6);

        // Both labs are oversubscribed.
        assert_eq!(snap.over_capacity.len(), 2);
        assert_eq!(snap.over_capacity[0].session_id, "mon-11");
        assert_eq!(snap.over_capacity[1].session_id, "wed-09");
    }

    #[test]
    fn test_sample_week_needs_saturday() {
        let mut catalog = Catalog::standard();
        catalog.days.pop();
        let err = sample_week(&catalog).unwrap_err();
        assert_eq!(
            err,
            AdmissionError::Reference(TimetableError::UnknownDay("saturday".into()))
        );
    }
}
