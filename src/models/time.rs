//! Calendar date and wall-clock time handling.
//!
//! Wire payloads carry calendar dates as ISO strings and times of day as
//! `"HH:MM"`. This module centralizes the parsing and formatting rules so
//! the planner core only ever works with chrono values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseError};
use serde::{Deserialize, Serialize};

/// Wire format for wall-clock times ("18:00").
const HHMM_FORMAT: &str = "%H:%M";

/// Parse a due-date string leniently.
///
/// Accepts a plain ISO date (`2025-03-14`) or a full ISO datetime with an
/// offset or trailing `Z` (`2025-03-14T09:30:00Z`); datetimes are truncated
/// to their date part.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    // Offset-free datetime; on failure this attempt's error is the one the
    // caller sees.
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
}

/// Parse a strict `YYYY-MM-DD` date (calendar range endpoints).
pub fn parse_plain_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

/// Parse a strict 24-hour `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), HHMM_FORMAT)
}

/// Format a time of day back to its wire form.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format(HHMM_FORMAT).to_string()
}

/// Signed minutes from `start` to `end` (negative when `end` precedes
/// `start`).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    end.signed_duration_since(start).num_minutes()
}

/// A contiguous block of free time on one calendar day.
///
/// Inputs only — blocks are consumed during planning and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeBlock {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, start, end }
    }

    /// Block length in minutes; negative when the end precedes the start.
    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.start, self.end)
    }
}
