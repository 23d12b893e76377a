//! Assignment scoring and ordering.
//!
//! Each assignment gets two things: a priority label for display and a sort
//! key that actually drives placement. The label is informational; the
//! allocator only looks at the key.

use chrono::NaiveDate;

use crate::models::{Assignment, Difficulty, PriorityLevel};

/// Signed days from `today` to `due`. Negative for overdue assignments.
pub fn days_until_due(today: NaiveDate, due: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Derive the priority label from due-date proximity and difficulty.
///
/// Evaluated in order, first match wins:
/// 1. due within 1 day -> high
/// 2. due within 3 days and at least medium difficulty -> high
/// 3. due within 7 days, or hard regardless of due date -> medium
/// 4. otherwise -> low
pub fn priority_for(days_until_due: i64, difficulty: Difficulty) -> PriorityLevel {
    let weight = difficulty.weight();
    if days_until_due <= 1 {
        return PriorityLevel::High;
    }
    if days_until_due <= 3 && weight >= 2 {
        return PriorityLevel::High;
    }
    if days_until_due <= 7 || weight == 3 {
        return PriorityLevel::Medium;
    }
    PriorityLevel::Low
}

/// Ordering key for global placement across all assignments.
///
/// Compared ascending: soonest due first, ties broken by higher difficulty,
/// then by larger estimated effort. The negated fields make the derived
/// lexicographic `Ord` express the descending tie-breakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub days_until_due: i64,
    neg_weight: i32,
    neg_hours: i64,
}

impl SortKey {
    pub fn new(days_until_due: i64, difficulty: Difficulty, estimated_hours: u32) -> Self {
        Self {
            days_until_due,
            neg_weight: -difficulty.weight(),
            neg_hours: -i64::from(estimated_hours),
        }
    }
}

/// An assignment together with its computed label and sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAssignment {
    pub assignment: Assignment,
    pub priority: PriorityLevel,
    pub key: SortKey,
}

/// Score a single assignment against `today`.
pub fn score_assignment(today: NaiveDate, assignment: Assignment) -> ScoredAssignment {
    let days = days_until_due(today, assignment.due_date);
    let priority = priority_for(days, assignment.difficulty);
    let key = SortKey::new(days, assignment.difficulty, assignment.estimated_hours);
    ScoredAssignment {
        assignment,
        priority,
        key,
    }
}

/// Score every assignment and return them in placement order.
///
/// The sort is stable, so assignments with identical keys keep their input
/// order.
pub fn rank_assignments(today: NaiveDate, assignments: Vec<Assignment>) -> Vec<ScoredAssignment> {
    let mut scored: Vec<ScoredAssignment> = assignments
        .into_iter()
        .map(|a| score_assignment(today, a))
        .collect();
    scored.sort_by(|a, b| a.key.cmp(&b.key));
    scored
}
