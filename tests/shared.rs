use std::thread;

use u_timetable::catalog::Catalog;
use u_timetable::models::{ClassSession, ClassType, WeekDay};
use u_timetable::shared::SharedTimetable;

#[test]
fn test_concurrent_admissions_fill_each_cell_once() {
    let shared = SharedTimetable::new(Catalog::standard());
    let slots: Vec<String> = shared
        .catalog()
        .time_slots()
        .iter()
        .map(|s| s.id.clone())
        .collect();

    // Every thread tries every Monday cell, each with its own room.
    let handles: Vec<_> = ["Room 101", "Room 102", "Room 205", "Room 301"]
        .into_iter()
        .map(|room| {
            let shared = shared.clone();
            let slots = slots.clone();
            thread::spawn(move || {
                let mut admitted = 0;
                for slot in &slots {
                    let id = shared.next_session_id(WeekDay::Monday, slot);
                    let s = ClassSession::new(id, "Subject", "CS301-A", room, ClassType::Lecture);
                    if shared.add_session(WeekDay::Monday, slot, s).is_ok() {
                        admitted += 1;
                    }
                }
                admitted
            })
        })
        .collect();

    let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(admitted, slots.len());

    let timetable = shared.snapshot();
    assert_eq!(timetable.len(), slots.len());
    for slot in &slots {
        assert!(timetable.is_occupied(WeekDay::Monday, slot));
    }
    assert_eq!(shared.analytics().total_classes, slots.len());
}
