//! # Study Planner Backend
//!
//! Greedy study-session scheduler for student workloads.
//!
//! Given a set of assignments with due dates and difficulty, and a set of
//! free time blocks, this crate produces an ordered placement of study work
//! into one-hour chunks. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Prioritization**: priority labels and a multi-field sort key derived
//!   from due-date proximity, difficulty and estimated effort
//! - **Allocation**: single-pass greedy placement of one-hour chunks carved
//!   from free time blocks
//! - **Calendar stub**: synthetic weekday/weekend availability behind an
//!   availability-source trait
//! - **HTTP API**: RESTful endpoints for plan generation, calendar sync and
//!   progress lookup
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API requests and responses
//! - [`models`]: domain vocabulary and date/time parsing
//! - [`planner`]: the prioritization and allocation core
//! - [`services`]: request parsing, orchestration, and the collaborator stubs
//! - [`routes`]: route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: planner configuration from `planner.toml`

pub mod api;

pub mod config;
pub mod models;

pub mod planner;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
