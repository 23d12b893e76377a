use serde::{Deserialize, Serialize};

use super::plan::TimeSlot;

/// Request body for the calendar-sync stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncCalendarRequest {
    /// Accepted and ignored; there is no real calendar behind this endpoint.
    pub token: String,
    /// "YYYY-MM-DD", inclusive.
    pub start_date: String,
    /// "YYYY-MM-DD", inclusive.
    pub end_date: String,
}

/// Synthetic availability for the requested range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarAvailabilityResponse {
    pub available_time_blocks: Vec<TimeSlot>,
}

pub const SYNC_CALENDAR: &str = "sync_calendar";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_calendar_request_round_trip() {
        let json = r#"{"token":"t","start_date":"2025-03-10","end_date":"2025-03-16"}"#;
        let req: SyncCalendarRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.start_date, "2025-03-10");
        assert_eq!(req.end_date, "2025-03-16");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(SYNC_CALENDAR, "sync_calendar");
    }
}
