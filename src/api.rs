//! Public API surface for the planner backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::calendar::CalendarAvailabilityResponse;
pub use crate::routes::calendar::SyncCalendarRequest;
pub use crate::routes::plan::Assignment;
pub use crate::routes::plan::GeneratePlanRequest;
pub use crate::routes::plan::StudentProfile;
pub use crate::routes::plan::StudyPlanResponse;
pub use crate::routes::plan::StudySession;
pub use crate::routes::plan::TimeSlot;
pub use crate::routes::progress::ProgressReport;

pub use crate::models::assignment::Difficulty;
pub use crate::models::assignment::PriorityLevel;
pub use crate::models::time::TimeBlock;
