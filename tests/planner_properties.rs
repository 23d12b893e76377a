//! Property checks for the planning core, verified by direct construction.

use std::collections::HashMap;
use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use study_planner_rust::models::{Assignment, Difficulty, TimeBlock};
use study_planner_rust::planner::{allocate, hour_chunks, rank_assignments, ChunkPool};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn assignment(
    course: &str,
    title: &str,
    due: NaiveDate,
    difficulty: Difficulty,
    hours: u32,
) -> Assignment {
    Assignment {
        course_name: course.to_string(),
        assignment_title: title.to_string(),
        due_date: due,
        difficulty,
        estimated_hours: hours,
    }
}

/// A mixed workload against a mixed week of availability.
fn sample_inputs() -> (Vec<Assignment>, Vec<TimeBlock>) {
    let assignments = vec![
        assignment("CS101", "Problem set", date(2025, 3, 15), Difficulty::Hard, 3),
        assignment("MATH2", "Worksheet", date(2025, 3, 16), Difficulty::Easy, 2),
        assignment("HIST1", "Essay", date(2025, 3, 21), Difficulty::Medium, 4),
        assignment("PHYS3", "Lab report", date(2025, 3, 15), Difficulty::Medium, 1),
    ];
    let blocks = vec![
        TimeBlock::new(date(2025, 3, 14), time(18, 0), time(20, 0)),
        // 80 minutes: contributes exactly one chunk.
        TimeBlock::new(date(2025, 3, 15), time(17, 30), time(18, 50)),
        TimeBlock::new(date(2025, 3, 16), time(13, 0), time(16, 0)),
        // Inverted: contributes nothing.
        TimeBlock::new(date(2025, 3, 17), time(20, 0), time(18, 0)),
    ];
    (assignments, blocks)
}

fn total_chunks(blocks: &[TimeBlock]) -> u32 {
    blocks
        .iter()
        .map(|b| (b.duration_minutes() / 60).max(0) as u32)
        .sum()
}

#[test]
fn chunk_conservation() {
    let today = date(2025, 3, 14);
    let (assignments, blocks) = sample_inputs();

    let requested: u32 = assignments.iter().map(|a| a.estimated_hours).sum();
    let available = total_chunks(&blocks);

    let ranked = rank_assignments(today, assignments);
    let mut pool = ChunkPool::from_blocks(&blocks);
    let allocation = allocate(&ranked, &mut pool);

    assert_eq!(allocation.total_hours, requested.min(available));
    assert_eq!(allocation.total_hours as usize, allocation.sessions.len());
}

#[test]
fn no_double_booking() {
    let today = date(2025, 3, 14);
    let (assignments, blocks) = sample_inputs();

    let ranked = rank_assignments(today, assignments);
    let mut pool = ChunkPool::from_blocks(&blocks);
    let allocation = allocate(&ranked, &mut pool);

    let mut seen = HashSet::new();
    for session in &allocation.sessions {
        let slot = (session.chunk.date, session.chunk.start, session.chunk.end);
        assert!(seen.insert(slot), "chunk handed out twice: {:?}", slot);
    }
}

#[test]
fn per_assignment_cap() {
    let today = date(2025, 3, 14);
    let (assignments, blocks) = sample_inputs();
    let requested: HashMap<String, u32> = assignments
        .iter()
        .map(|a| (a.assignment_title.clone(), a.estimated_hours))
        .collect();

    let ranked = rank_assignments(today, assignments);
    let mut pool = ChunkPool::from_blocks(&blocks);
    let allocation = allocate(&ranked, &mut pool);

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for session in &allocation.sessions {
        *counts.entry(session.assignment_title.as_str()).or_default() += 1;
    }
    for (title, count) in counts {
        assert!(count <= requested[title], "{} over-scheduled", title);
    }
}

#[test]
fn sessions_grouped_in_rank_order() {
    let today = date(2025, 3, 14);
    let (assignments, blocks) = sample_inputs();

    let ranked = rank_assignments(today, assignments);
    let rank_of: HashMap<String, usize> = ranked
        .iter()
        .enumerate()
        .map(|(i, s)| (s.assignment.assignment_title.clone(), i))
        .collect();

    let mut pool = ChunkPool::from_blocks(&blocks);
    let allocation = allocate(&ranked, &mut pool);

    // All sessions for a more-urgent assignment come before any session for
    // a less-urgent one.
    let ranks: Vec<usize> = allocation
        .sessions
        .iter()
        .map(|s| rank_of[s.assignment_title.as_str()])
        .collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);
}

#[test]
fn chunk_expansion_is_idempotent() {
    let block = TimeBlock::new(date(2025, 3, 14), time(8, 10), time(13, 5));
    let first: Vec<_> = hour_chunks(block).collect();
    let second: Vec<_> = hour_chunks(block).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn pool_consumption_matches_session_count() {
    let today = date(2025, 3, 14);
    let (assignments, blocks) = sample_inputs();

    let ranked = rank_assignments(today, assignments);
    let mut pool = ChunkPool::from_blocks(&blocks);
    let before = pool.remaining();
    let allocation = allocate(&ranked, &mut pool);
    let after = pool.remaining();

    assert_eq!(before - after, allocation.sessions.len());
}
