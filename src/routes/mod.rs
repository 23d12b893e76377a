//! Route-specific data types.
//!
//! One module per endpoint, each carrying the wire DTOs for its request and
//! response bodies plus the operation-name constant used in logs.

pub mod calendar;
pub mod plan;
pub mod progress;
