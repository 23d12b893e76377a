//! Plan generation: wire parsing, core invocation, response shaping.

use chrono::NaiveDate;

use crate::models::time::{format_hhmm, parse_hhmm, parse_iso_date, parse_plain_date};
use crate::models::{Assignment, Difficulty, TimeBlock};
use crate::planner::{allocate, rank_assignments, ChunkPool, PlannedSession};
use crate::routes::plan::{GeneratePlanRequest, StudyPlanResponse, StudySession, TimeSlot};

use super::PlanError;

const PLAN_TITLE: &str = "Weekly Smart Study Plan";
const REASONING_SUMMARY: &str =
    "assignments sorted by due date and difficulty. then placed into open time slots.";

/// Generate a study plan for the request.
///
/// `today` is injected rather than read from the clock so callers and tests
/// control what "due tomorrow" means. The only failures are malformed date
/// or time strings in the request; scheduling itself never fails, a plan
/// that places nothing is still a plan.
pub fn generate_plan(
    today: NaiveDate,
    request: &GeneratePlanRequest,
) -> Result<StudyPlanResponse, PlanError> {
    let assignments = parse_assignments(&request.assignments)?;
    let blocks = parse_time_slots(&request.calendar_availability)?;

    let ranked = rank_assignments(today, assignments);
    let mut pool = ChunkPool::from_blocks(&blocks);
    let allocation = allocate(&ranked, &mut pool);

    let overview = format!(
        "scheduled {} hour(s). higher priority items placed first.",
        allocation.total_hours
    );

    Ok(StudyPlanResponse {
        plan_title: PLAN_TITLE.to_string(),
        weekly_overview: overview,
        study_sessions: allocation.sessions.iter().map(to_wire_session).collect(),
        total_scheduled_hours: allocation.total_hours,
        llm_reasoning_summary: REASONING_SUMMARY.to_string(),
    })
}

fn parse_assignments(
    wire: &[crate::routes::plan::Assignment],
) -> Result<Vec<Assignment>, PlanError> {
    wire.iter()
        .map(|a| {
            let due_date = parse_iso_date(&a.due_date).map_err(|_| PlanError::InvalidDate {
                field: "due_date",
                value: a.due_date.clone(),
            })?;
            Ok(Assignment {
                course_name: a.course_name.clone(),
                assignment_title: a.assignment_title.clone(),
                due_date,
                difficulty: Difficulty::from_label(&a.estimated_difficulty),
                estimated_hours: a.estimated_hours,
            })
        })
        .collect()
}

fn parse_time_slots(wire: &[TimeSlot]) -> Result<Vec<TimeBlock>, PlanError> {
    wire.iter()
        .map(|slot| {
            let date =
                parse_plain_date(&slot.scheduled_date).map_err(|_| PlanError::InvalidDate {
                    field: "scheduled_date",
                    value: slot.scheduled_date.clone(),
                })?;
            let start = parse_hhmm(&slot.start_time).map_err(|_| PlanError::InvalidTime {
                field: "start_time",
                value: slot.start_time.clone(),
            })?;
            let end = parse_hhmm(&slot.end_time).map_err(|_| PlanError::InvalidTime {
                field: "end_time",
                value: slot.end_time.clone(),
            })?;
            Ok(TimeBlock::new(date, start, end))
        })
        .collect()
}

fn to_wire_session(session: &PlannedSession) -> StudySession {
    StudySession {
        course_name: session.course_name.clone(),
        assignment_title: session.assignment_title.clone(),
        scheduled_date: session.chunk.date.to_string(),
        start_time: format_hhmm(session.chunk.start),
        end_time: format_hhmm(session.chunk.end),
        priority_level: session.priority,
    }
}

#[cfg(test)]
#[path = "plan_generator_tests.rs"]
mod plan_generator_tests;
