//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies already live with their routes; this module
//! re-exports them and adds the few HTTP-only shapes.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::routes::calendar::{CalendarAvailabilityResponse, SyncCalendarRequest};
pub use crate::routes::plan::{
    Assignment, GeneratePlanRequest, StudentProfile, StudyPlanResponse, StudySession, TimeSlot,
};
pub use crate::routes::progress::ProgressReport;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Query parameters for the progress endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressQuery {
    pub student_id: String,
}
