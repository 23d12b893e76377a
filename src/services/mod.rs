//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the planning core: they parse
//! wire payloads into domain types, run the core, and shape the responses.

use thiserror::Error;

pub mod availability;
pub mod plan_generator;
pub mod progress;

pub use availability::{AvailabilitySource, SyntheticCalendar};
pub use plan_generator::generate_plan;
pub use progress::progress_report;

/// Boundary-validation failure for a plan request.
///
/// The core itself is total; these errors only arise while parsing the
/// request's date and time strings, before the core runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid date {value:?} in field `{field}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid time {value:?} in field `{field}`")]
    InvalidTime { field: &'static str, value: String },
}
