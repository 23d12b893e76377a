use serde::{Deserialize, Serialize};

/// Static demo counters for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub student_id: String,
    pub completed_sessions: u32,
    pub remaining_workload_hours_estimate: u32,
    pub note: String,
}

pub const GET_PROGRESS: &str = "get_progress";
