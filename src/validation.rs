//! Catalog integrity checks.
//!
//! Checks the reference data before any scheduling happens. Detects:
//! - Duplicate days, slot ids, room ids or room names
//! - Slot ids that are not `HH:MM` times
//! - Rooms without seats
//! - Catalogs with no days, slots or rooms
//!
//! All problems are reported together, not just the first.

use crate::catalog::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entries share the same key.
    DuplicateId,
    /// A slot id is not an `HH:MM` time.
    MalformedSlot,
    /// A room has zero capacity.
    ZeroCapacity,
    /// A required list is empty.
    Empty,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. At least one day, slot and room
/// 2. No duplicate days
/// 3. No duplicate slot ids; every slot id parses as `HH:MM`
/// 4. No duplicate room ids or display names
/// 5. Every room has at least one seat
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    for (list, empty) in [
        ("days", catalog.days.is_empty()),
        ("time slots", catalog.time_slots.is_empty()),
        ("rooms", catalog.rooms.is_empty()),
    ] {
        if empty {
            errors.push(ValidationError::new(
                ValidationErrorKind::Empty,
                format!("Catalog has no {list}"),
            ));
        }
    }

    let mut days = HashSet::new();
    for day in &catalog.days {
        if !days.insert(day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day: {day}"),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    for slot in &catalog.time_slots {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", slot.id),
            ));
        }
        if slot.start_minutes().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedSlot,
                format!("Time slot ID '{}' is not an HH:MM time", slot.id),
            ));
        }
    }

    // Sessions reference rooms by id or name, so both must be unambiguous.
    let mut room_keys = HashSet::new();
    for room in &catalog.rooms {
        if !room_keys.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if room.name != room.id && !room_keys.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room name: {}", room.name),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Room '{}' has no capacity", room.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Room, TimeSlot, WeekDay};

    #[test]
    fn test_standard_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::standard()).is_ok());
    }

    #[test]
    fn test_duplicate_slot_id() {
        let mut c = Catalog::standard();
        c.time_slots.push(TimeSlot::new("09:00", "09:00 AM", "again"));

        let errors = validate_catalog(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("slot")));
    }

    #[test]
    fn test_malformed_slot() {
        let mut c = Catalog::standard();
        c.time_slots.push(TimeSlot::new("after lunch", "", ""));

        let errors = validate_catalog(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedSlot));
    }

    #[test]
    fn test_duplicate_room_id_and_name() {
        let mut c = Catalog::standard();
        c.rooms.push(Room::classroom("room-101", "Room 999").with_capacity(10));
        c.rooms.push(Room::classroom("room-999", "Lab 201").with_capacity(10));

        let errors = validate_catalog(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message == "Duplicate room ID: room-101"));
        assert!(errors
            .iter()
            .any(|e| e.message == "Duplicate room name: Lab 201"));
    }

    #[test]
    fn test_zero_capacity() {
        let mut c = Catalog::standard();
        c.rooms.push(Room::classroom("closet", "Closet"));

        let errors = validate_catalog(&c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
    }

    #[test]
    fn test_duplicate_day() {
        let mut c = Catalog::standard();
        c.days.push(WeekDay::Monday);

        let errors = validate_catalog(&c).unwrap_err();
        assert!(errors.iter().any(|e| e.message == "Duplicate day: monday"));
    }

    #[test]
    fn test_multiple_errors() {
        let c = Catalog::new(vec![], vec![TimeSlot::new("x", "", "")], vec![]);

        let errors = validate_catalog(&c).unwrap_err();
        // no days, no rooms, malformed slot
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::Empty)
                .count(),
            2
        );
    }
}
