//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::PlannerConfig;
use crate::services::AvailabilitySource;

/// Shared application state passed to all handlers.
///
/// Everything here is immutable after startup, so clones are cheap and no
/// locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Planner configuration loaded at startup
    pub config: Arc<PlannerConfig>,
    /// Availability source backing the calendar-sync endpoint
    pub calendar: Arc<dyn AvailabilitySource>,
}

impl AppState {
    /// Create a new application state with the given config and calendar.
    pub fn new(config: Arc<PlannerConfig>, calendar: Arc<dyn AvailabilitySource>) -> Self {
        Self { config, calendar }
    }
}
