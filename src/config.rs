//! Configuration file support.
//!
//! Reads the scheduling policy and catalog from TOML. Every section is
//! optional:
//!
//! ```toml
//! [scheduling]
//! room_check = "duration-aware"
//! enforce_capacity = true
//!
//! [catalog]
//! days = ["monday", "tuesday", "wednesday", "thursday", "friday"]
//! ```
//!
//! Missing sections fall back to [`SchedulingPolicy::default`] and
//! [`Catalog::standard`]. A catalog that fails
//! [`validate_catalog`](crate::validation::validate_catalog) is rejected.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::conflict::SchedulingPolicy;
use crate::error::ConfigError;
use crate::scheduler::Scheduler;
use crate::validation::validate_catalog;

/// Timetable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default)]
    pub scheduling: SchedulingPolicy,
    #[serde(default)]
    pub catalog: Catalog,
}

impl TimetableConfig {
    /// Parses and validates a configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TimetableConfig = toml::from_str(content)?;
        validate_catalog(&config.catalog).map_err(ConfigError::InvalidCatalog)?;
        info!(
            "Loaded timetable config: {} days, {} slots, {} rooms, room check {:?}",
            config.catalog.days.len(),
            config.catalog.time_slots.len(),
            config.catalog.rooms.len(),
            config.scheduling.room_check
        );
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    /// * `ConfigError::Io` if the file cannot be read
    /// * `ConfigError::Parse` if it is not valid TOML for this schema
    /// * `ConfigError::InvalidCatalog` if the catalog fails validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// A scheduler over this configuration's catalog and policy.
    pub fn scheduler(&self) -> Scheduler<'_> {
        Scheduler::new(&self.catalog).with_policy(self.scheduling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::RoomCheck;
    use crate::models::{RoomType, WeekDay};

    #[test]
    fn test_empty_config_is_standard() {
        let config = TimetableConfig::from_toml_str("").unwrap();
        assert_eq!(config, TimetableConfig::default());
        assert_eq!(config.catalog, Catalog::standard());
        assert_eq!(config.scheduling.room_check, RoomCheck::SlotExact);
        assert!(!config.scheduling.enforce_capacity);
    }

    #[test]
    fn test_scheduling_section() {
        let config = TimetableConfig::from_toml_str(
            r#"
            [scheduling]
            room_check = "duration-aware"
            enforce_capacity = true
            "#,
        )
        .unwrap();
        assert_eq!(config.scheduling.room_check, RoomCheck::DurationAware);
        assert!(config.scheduling.enforce_capacity);
        assert_eq!(config.catalog.rooms.len(), 8);
    }

    #[test]
    fn test_partial_catalog() {
        let config = TimetableConfig::from_toml_str(
            r#"
            [catalog]
            days = ["monday", "wednesday", "friday"]

            [[catalog.rooms]]
            id = "aud-1"
            name = "Auditorium"
            capacity = 300
            room_type = "seminar-hall"
            building = "Main Block"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.days,
            vec![WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday]
        );
        assert_eq!(config.catalog.time_slots.len(), 8);
        assert_eq!(config.catalog.rooms.len(), 1);
        assert_eq!(config.catalog.rooms[0].room_type, RoomType::SeminarHall);
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let err = TimetableConfig::from_toml_str(
            r#"
            [[catalog.rooms]]
            id = "r1"
            name = "R1"
            capacity = 0
            room_type = "classroom"
            building = ""
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::InvalidCatalog(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error() {
        let err = TimetableConfig::from_toml_str("[scheduling]\nroom_check = \"sometimes\"")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TimetableConfig::from_file("/nonexistent/timetable.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "/nonexistent/timetable.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
