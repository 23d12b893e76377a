//! Domain model types shared across the planner and the service layer.

pub mod assignment;
pub mod time;

pub use assignment::{Assignment, Difficulty, PriorityLevel};
pub use time::TimeBlock;
