//! Faculty class timetabling.
//!
//! Maintains a weekly grid of (day × time slot) cells, each holding at most
//! one class session. Admission checks slot occupancy and room
//! double-booking; analytics summarize teaching load and room use.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WeekDay`, `TimeSlot`, `Room`,
//!   `ClassSession`, `Timetable`
//! - **`catalog`**: Reference data (days, slots, rooms)
//! - **`validation`**: Catalog integrity checks (duplicate IDs, malformed slots)
//! - **`conflict`**: Placement conflict checks and the scheduling policy
//! - **`scheduler`**: `Scheduler` (the only writer) and `AnalyticsSnapshot`
//! - **`shared`**: Mutex-guarded timetable for multi-threaded hosts
//! - **`config`**: TOML configuration
//! - **`sample`**: A populated reference week
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::{ClassSession, ClassType, Timetable, WeekDay};
//! use u_timetable::scheduler::{AnalyticsSnapshot, Scheduler};
//!
//! let catalog = Catalog::standard();
//! let scheduler = Scheduler::new(&catalog);
//! let mut timetable = Timetable::new();
//!
//! let id = timetable.next_session_id(WeekDay::Wednesday, "09:00");
//! let lab = ClassSession::new(id, "Data Science Lab", "CS401-A", "Lab 301", ClassType::Lab)
//!     .with_students(24)
//!     .with_duration(120);
//! scheduler.add_session(&mut timetable, WeekDay::Wednesday, "09:00", lab).unwrap();
//!
//! let snapshot = AnalyticsSnapshot::compute(&timetable, &catalog);
//! assert_eq!(snapshot.total_classes, 1);
//! assert!((snapshot.total_hours - 2.0).abs() < 1e-10);
//! ```

pub mod catalog;
pub mod config;
pub mod conflict;
pub mod error;
pub mod models;
pub mod sample;
pub mod scheduler;
pub mod shared;
pub mod validation;
