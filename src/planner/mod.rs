//! The planning core: prioritization and greedy chunk allocation.
//!
//! Two pure functions compose the planner. [`priority::rank_assignments`]
//! scores every assignment and orders them by urgency; [`allocator::allocate`]
//! then walks that order, handing out one-hour chunks carved from the free
//! time blocks until the work is placed or the chunks run out.
//!
//! Everything in this module is synchronous and request-scoped: each
//! invocation owns its own chunk pool and assignment list, so there is no
//! shared state between callers.

pub mod allocator;
pub mod priority;

pub use allocator::{allocate, hour_chunks, Allocation, Chunk, ChunkPool, PlannedSession};
pub use priority::{priority_for, rank_assignments, score_assignment, ScoredAssignment, SortKey};
