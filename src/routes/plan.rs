use serde::{Deserialize, Serialize};

use crate::models::PriorityLevel;

/// Who the plan is for.
///
/// Carried on the request for API fidelity; the allocator does not consult
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub major: String,
    pub study_hours_per_week: u32,
    #[serde(default)]
    pub preferred_study_times: Vec<String>,
}

/// One assignment as it arrives on the wire, dates and difficulty still
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub course_name: String,
    pub assignment_title: String,
    /// ISO date string, e.g. "2025-03-14" or "2025-03-14T09:00:00Z".
    pub due_date: String,
    /// Free-form difficulty label: easy, medium or hard.
    pub estimated_difficulty: String,
    pub estimated_hours: u32,
}

/// One open block of free time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// "YYYY-MM-DD".
    pub scheduled_date: String,
    /// "HH:MM", 24-hour.
    pub start_time: String,
    /// "HH:MM", 24-hour.
    pub end_time: String,
}

/// Request body for plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    pub student_profile: StudentProfile,
    pub assignments: Vec<Assignment>,
    pub calendar_availability: Vec<TimeSlot>,
}

/// One scheduled hour of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub course_name: String,
    pub assignment_title: String,
    pub scheduled_date: String,
    pub start_time: String,
    pub end_time: String,
    pub priority_level: PriorityLevel,
}

/// The generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanResponse {
    pub plan_title: String,
    pub weekly_overview: String,
    pub study_sessions: Vec<StudySession>,
    pub total_scheduled_hours: u32,
    pub llm_reasoning_summary: String,
}

pub const GENERATE_PLAN: &str = "generate_plan";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_study_times_defaults_to_empty() {
        let json = r#"{
            "student_id": "s-1",
            "major": "physics",
            "study_hours_per_week": 10
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert!(profile.preferred_study_times.is_empty());
    }

    #[test]
    fn test_study_session_serializes_priority_lowercase() {
        let session = StudySession {
            course_name: "CS101".to_string(),
            assignment_title: "Problem set".to_string(),
            scheduled_date: "2025-03-14".to_string(),
            start_time: "18:00".to_string(),
            end_time: "19:00".to_string(),
            priority_level: PriorityLevel::High,
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["priority_level"], "high");
        assert_eq!(json["start_time"], "18:00");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GENERATE_PLAN, "generate_plan");
    }
}
