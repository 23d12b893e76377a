//! Planner configuration file support.
//!
//! Configuration lives in a `planner.toml` read at startup. Every field has
//! a built-in default, so a missing file or a partial file is fine. The
//! `PLANNER_CONFIG` environment variable overrides the search path.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::time::parse_hhmm;

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time {value:?} for `{field}`")]
    InvalidTime { field: &'static str, value: String },
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub calendar: CalendarSlots,
}

/// Daily free-slot times handed out by the synthetic calendar.
///
/// Times are wire-format `"HH:MM"` strings; they are validated when the
/// calendar source is built, not at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSlots {
    #[serde(default = "default_weekday_start")]
    pub weekday_start: String,
    #[serde(default = "default_weekday_end")]
    pub weekday_end: String,
    #[serde(default = "default_weekend_start")]
    pub weekend_start: String,
    #[serde(default = "default_weekend_end")]
    pub weekend_end: String,
}

fn default_weekday_start() -> String {
    "18:00".to_string()
}

fn default_weekday_end() -> String {
    "20:00".to_string()
}

fn default_weekend_start() -> String {
    "13:00".to_string()
}

fn default_weekend_end() -> String {
    "16:00".to_string()
}

impl Default for CalendarSlots {
    fn default() -> Self {
        Self {
            weekday_start: default_weekday_start(),
            weekday_end: default_weekday_end(),
            weekend_start: default_weekend_start(),
            weekend_end: default_weekend_end(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarSlots::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: PlannerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Honors `PLANNER_CONFIG` first, then searches for `planner.toml` in
    /// the current and parent directory. Falls back to built-in defaults
    /// when no file exists; an unreadable or malformed file is still an
    /// error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("PLANNER_CONFIG") {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("planner.toml"),
            PathBuf::from("../planner.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Weekday (Mon-Fri) slot as parsed times.
    pub fn weekday_slot(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        Ok((
            parse_slot("calendar.weekday_start", &self.calendar.weekday_start)?,
            parse_slot("calendar.weekday_end", &self.calendar.weekday_end)?,
        ))
    }

    /// Weekend (Sat-Sun) slot as parsed times.
    pub fn weekend_slot(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        Ok((
            parse_slot("calendar.weekend_start", &self.calendar.weekend_start)?,
            parse_slot("calendar.weekend_end", &self.calendar.weekend_end)?,
        ))
    }
}

fn parse_slot(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    parse_hhmm(value).map_err(|_| ConfigError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_times() {
        let config = PlannerConfig::default();
        assert_eq!(config.calendar.weekday_start, "18:00");
        assert_eq!(config.calendar.weekday_end, "20:00");
        assert_eq!(config.calendar.weekend_start, "13:00");
        assert_eq!(config.calendar.weekend_end, "16:00");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[calendar]
weekday_start = "17:00"
"#;

        let config: PlannerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.calendar.weekday_start, "17:00");
        // Unset fields keep their defaults.
        assert_eq!(config.calendar.weekday_end, "20:00");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar.weekend_end, "16:00");
    }

    #[test]
    fn test_slot_parsing() {
        let config = PlannerConfig::default();
        let (start, end) = config.weekday_slot().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_slot_time_is_rejected() {
        let toml = r#"
[calendar]
weekend_start = "1pm"
"#;

        let config: PlannerConfig = toml::from_str(toml).unwrap();
        let err = config.weekend_slot().unwrap_err();
        assert!(err.to_string().contains("calendar.weekend_start"));
    }
}
