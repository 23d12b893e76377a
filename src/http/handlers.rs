//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use tracing::{debug, info};

use super::dto::{HealthResponse, ProgressQuery};
use super::error::AppError;
use super::state::AppState;
use crate::models::time::{format_hhmm, parse_plain_date};
use crate::routes::calendar::{CalendarAvailabilityResponse, SyncCalendarRequest, SYNC_CALENDAR};
use crate::routes::plan::{GeneratePlanRequest, StudyPlanResponse, TimeSlot, GENERATE_PLAN};
use crate::routes::progress::{ProgressReport, GET_PROGRESS};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /v1/sync-calendar
///
/// Produce synthetic availability for an inclusive date range. The token is
/// accepted and ignored; no real calendar sits behind this endpoint.
pub async fn sync_calendar(
    State(state): State<AppState>,
    Json(request): Json<SyncCalendarRequest>,
) -> HandlerResult<CalendarAvailabilityResponse> {
    let start = parse_plain_date(&request.start_date).map_err(|_| {
        AppError::BadRequest(format!("invalid date {:?} in field `start_date`", request.start_date))
    })?;
    let end = parse_plain_date(&request.end_date).map_err(|_| {
        AppError::BadRequest(format!("invalid date {:?} in field `end_date`", request.end_date))
    })?;

    let blocks = state.calendar.availability(start, end).await;
    info!(operation = SYNC_CALENDAR, blocks = blocks.len(), "calendar range expanded");

    let available_time_blocks = blocks
        .iter()
        .map(|b| TimeSlot {
            scheduled_date: b.date.to_string(),
            start_time: format_hhmm(b.start),
            end_time: format_hhmm(b.end),
        })
        .collect();

    Ok(Json(CalendarAvailabilityResponse {
        available_time_blocks,
    }))
}

/// POST /v1/generate-plan
///
/// Run the planning core over the request's assignments and availability.
pub async fn generate_plan(
    State(_state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> HandlerResult<StudyPlanResponse> {
    let today = Utc::now().date_naive();
    debug!(
        operation = GENERATE_PLAN,
        assignments = request.assignments.len(),
        slots = request.calendar_availability.len(),
        "generating plan"
    );

    let plan = services::generate_plan(today, &request)?;
    info!(
        operation = GENERATE_PLAN,
        student = %request.student_profile.student_id,
        scheduled_hours = plan.total_scheduled_hours,
        "plan generated"
    );

    Ok(Json(plan))
}

/// GET /v1/progress?student_id=...
///
/// Static demo counters for the given student.
pub async fn get_progress(
    State(_state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> HandlerResult<ProgressReport> {
    debug!(operation = GET_PROGRESS, student = %query.student_id, "progress requested");
    Ok(Json(services::progress_report(&query.student_id)))
}
