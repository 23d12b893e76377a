//! Study Planner HTTP Server Binary
//!
//! This is the main entry point for the planner REST API server.
//! It loads the configuration, builds the synthetic calendar source, sets up
//! the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin planner-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PLANNER_CONFIG`: Path to planner.toml (default: searched near cwd)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use study_planner_rust::config::PlannerConfig;
use study_planner_rust::http::{create_router, AppState};
use study_planner_rust::services::{AvailabilitySource, SyntheticCalendar};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Study Planner HTTP Server");

    // Load configuration once and share it across the app
    let config = Arc::new(PlannerConfig::load()?);
    let calendar =
        Arc::new(SyntheticCalendar::from_config(&config)?) as Arc<dyn AvailabilitySource>;
    info!("Configuration loaded successfully");

    // Create application state
    let state = AppState::new(config, calendar);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
