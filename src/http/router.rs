//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/sync-calendar", post(handlers::sync_calendar))
        .route("/generate-plan", post(handlers::generate_plan))
        .route("/progress", get(handlers::get_progress));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::PlannerConfig;
    use crate::services::{AvailabilitySource, SyntheticCalendar};

    #[test]
    fn test_router_creation() {
        let config = Arc::new(PlannerConfig::default());
        let calendar = Arc::new(SyntheticCalendar::from_config(&config).unwrap())
            as Arc<dyn AvailabilitySource>;
        let state = AppState::new(config, calendar);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
