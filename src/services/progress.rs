//! Progress-tracker stub.
//!
//! Returns fixed demo counters; nothing here depends on the planner.

use crate::routes::progress::ProgressReport;

const COMPLETED_SESSIONS: u32 = 3;
const REMAINING_WORKLOAD_HOURS: u32 = 6;
const NOTE: &str = "demo data only";

/// Static demo counters for the given student.
pub fn progress_report(student_id: &str) -> ProgressReport {
    ProgressReport {
        student_id: student_id.to_string(),
        completed_sessions: COMPLETED_SESSIONS,
        remaining_workload_hours_estimate: REMAINING_WORKLOAD_HOURS,
        note: NOTE.to_string(),
    }
}
