//! Domain vocabulary for assignments and their urgency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Perceived difficulty of an assignment.
///
/// Wire payloads carry free-form difficulty strings; parsing is lenient and
/// unrecognized labels fall back to [`Difficulty::Medium`] rather than
/// rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, case-insensitive and whitespace-tolerant.
    /// Unknown labels default to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// Numeric weight used by the prioritizer: easy=1, medium=2, hard=3.
    pub fn weight(self) -> i32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Urgency tag attached to scheduled sessions.
///
/// Informational only — placement order is driven by the sort key, not by
/// this label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assignment with its boundary strings already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub course_name: String,
    pub assignment_title: String,
    pub due_date: NaiveDate,
    pub difficulty: Difficulty,
    /// Estimated effort in whole hours.
    pub estimated_hours: u32,
}
