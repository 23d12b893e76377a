//! Chunk expansion and greedy session allocation.
//!
//! Free time blocks are carved into exactly-one-hour chunks; leftover
//! minutes are dropped, never rounded up into a short chunk. The chunks form
//! a FIFO pool that the allocator drains while walking the ranked
//! assignments.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{PriorityLevel, TimeBlock};

use super::priority::ScoredAssignment;

/// One schedulable hour carved from a free time block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Lazily expand a block into its whole-hour chunks.
///
/// Chunks start at the block's start time and advance by one hour each;
/// once fewer than 60 minutes remain the iterator ends and the remainder is
/// discarded. Zero- or negative-duration blocks yield nothing.
pub fn hour_chunks(block: TimeBlock) -> impl Iterator<Item = Chunk> {
    let whole_hours = (block.duration_minutes() / 60).max(0);
    (0..whole_hours).map(move |i| Chunk {
        date: block.date,
        start: block.start + Duration::hours(i),
        end: block.start + Duration::hours(i + 1),
    })
}

/// FIFO pool of unassigned chunks.
///
/// Backed by a precomputed array and a cursor, so popping the front is O(1)
/// while remaining functionally identical to destructive pop-front.
#[derive(Debug, Clone)]
pub struct ChunkPool {
    chunks: Vec<Chunk>,
    cursor: usize,
}

impl ChunkPool {
    /// Build the pool from blocks in input order, chunks within a block in
    /// time order.
    pub fn from_blocks(blocks: &[TimeBlock]) -> Self {
        let chunks = blocks.iter().copied().flat_map(hour_chunks).collect();
        Self { chunks, cursor: 0 }
    }

    /// Pop the earliest remaining chunk.
    pub fn pop(&mut self) -> Option<Chunk> {
        let chunk = self.chunks.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(chunk)
    }

    pub fn remaining(&self) -> usize {
        self.chunks.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for ChunkPool {
    fn default() -> Self {
        Self::from_blocks(&[])
    }
}

/// One chunk bound to one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSession {
    pub course_name: String,
    pub assignment_title: String,
    pub chunk: Chunk,
    pub priority: PriorityLevel,
}

/// Result of one allocation pass.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    pub sessions: Vec<PlannedSession>,
    pub total_hours: u32,
}

/// Greedily bind pool chunks to assignments in ranked order.
///
/// Single pass, no backtracking: each assignment takes chunks until its
/// estimated hours are met or the pool runs dry. An assignment the pool
/// cannot fully serve is simply left short; once the pool is empty every
/// later assignment receives zero sessions. Total over its inputs, so an
/// empty pool degrades to an empty plan rather than an error.
pub fn allocate(ranked: &[ScoredAssignment], pool: &mut ChunkPool) -> Allocation {
    let mut allocation = Allocation::default();

    for scored in ranked {
        let mut hours_left = scored.assignment.estimated_hours;

        while hours_left > 0 {
            let Some(chunk) = pool.pop() else {
                break;
            };
            allocation.sessions.push(PlannedSession {
                course_name: scored.assignment.course_name.clone(),
                assignment_title: scored.assignment.assignment_title.clone(),
                chunk,
                priority: scored.priority,
            });
            hours_left -= 1;
            allocation.total_hours += 1;
        }
    }

    allocation
}
