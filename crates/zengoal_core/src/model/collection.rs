//! Pure transformations over the ordered goal collection.
//!
//! # Responsibility
//! - Express every collection mutation as a function from one sequence to a
//!   new sequence.
//! - Keep derived display values (counts, progress) next to the data they
//!   derive from.
//!
//! # Invariants
//! - Insertion order is newest-first: `add` prepends, nothing re-sorts.
//! - Transformations targeting an absent id return the input unchanged.
//! - A matched goal is updated field-by-field; unrelated fields survive.

use crate::model::goal::{Goal, GoalId};

/// Returns a new sequence with `goal` prepended.
///
/// Precondition: `goal.title` is non-blank. Enforced by the construction
/// boundary (`Goal::new`), not re-validated here.
pub fn add(goal: Goal, goals: &[Goal]) -> Vec<Goal> {
    let mut next = Vec::with_capacity(goals.len() + 1);
    next.push(goal);
    next.extend_from_slice(goals);
    next
}

/// Returns a new sequence without the goal matching `id`.
///
/// No-op (equal content) when `id` is not present.
pub fn remove(id: GoalId, goals: &[Goal]) -> Vec<Goal> {
    goals
        .iter()
        .filter(|goal| goal.id != id)
        .cloned()
        .collect()
}

/// Returns a new sequence with the matching goal's completion flag flipped.
///
/// No-op when `id` is not present.
pub fn toggle_completed(id: GoalId, goals: &[Goal]) -> Vec<Goal> {
    goals
        .iter()
        .map(|goal| {
            if goal.id == id {
                let flipped = !goal.is_completed;
                goal.clone().with_completed(flipped)
            } else {
                goal.clone()
            }
        })
        .collect()
}

/// Returns a new sequence with the matching goal's notes replaced.
///
/// No-op when `id` is not present.
pub fn update_notes(id: GoalId, notes: &str, goals: &[Goal]) -> Vec<Goal> {
    goals
        .iter()
        .map(|goal| {
            if goal.id == id {
                goal.clone().with_notes(notes)
            } else {
                goal.clone()
            }
        })
        .collect()
}

/// Returns whether a goal with `id` exists in the sequence.
pub fn contains(id: GoalId, goals: &[Goal]) -> bool {
    goals.iter().any(|goal| goal.id == id)
}

/// Number of completed goals.
pub fn completed_count(goals: &[Goal]) -> usize {
    goals.iter().filter(|goal| goal.is_completed).count()
}

/// Share of completed goals as a percentage in `0.0..=100.0`.
///
/// Defined as `0.0` for the empty collection.
pub fn progress_percent(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    completed_count(goals) as f64 / goals.len() as f64 * 100.0
}
