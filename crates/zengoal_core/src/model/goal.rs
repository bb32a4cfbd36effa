//! Goal domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the tracker.
//! - Provide field-level update helpers on an immutable record.
//!
//! # Invariants
//! - `id` is stable and never reused for another goal.
//! - `title` is trimmed and non-blank at creation time and never mutated
//!   afterwards.
//! - `created_at` is assigned once and used only for display.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// Validation failure raised at the goal creation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalValidationError {
    /// Title was empty or whitespace-only after trimming.
    BlankTitle,
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "goal title cannot be blank"),
        }
    }
}

impl Error for GoalValidationError {}

/// Canonical record for one user-defined milestone.
///
/// Serialized field names stay in camelCase to match the persisted JSON
/// shape used by earlier versions of the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Stable global ID, the sole lookup and equality key.
    pub id: GoalId,
    /// Display title. Trimmed, non-blank at creation, immutable after.
    pub title: String,
    /// Free-form annotation. May be empty.
    pub notes: String,
    /// Creation time in Unix epoch milliseconds. Display only; the list is
    /// ordered by insertion, never re-sorted by this value.
    pub created_at: i64,
    /// Completion flag, toggled independently of `notes`.
    pub is_completed: bool,
}

impl Goal {
    /// Creates a new goal with a generated ID and the current timestamp.
    ///
    /// Trims both inputs. Fails with `BlankTitle` when the trimmed title is
    /// empty; notes may be empty.
    pub fn new(
        title: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Result<Self, GoalValidationError> {
        Self::with_id(Uuid::new_v4(), now_epoch_ms(), title, notes)
    }

    /// Creates a goal with caller-provided identity and timestamp.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: GoalId,
        created_at: i64,
        title: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Result<Self, GoalValidationError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(GoalValidationError::BlankTitle);
        }
        Ok(Self {
            id,
            title: title.to_string(),
            notes: notes.as_ref().trim().to_string(),
            created_at,
            is_completed: false,
        })
    }

    /// Returns a copy of this goal with `is_completed` replaced.
    ///
    /// All other fields are preserved unchanged.
    pub fn with_completed(self, is_completed: bool) -> Self {
        Self {
            is_completed,
            ..self
        }
    }

    /// Returns a copy of this goal with `notes` replaced.
    ///
    /// All other fields are preserved unchanged.
    pub fn with_notes(self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Goal, GoalValidationError};

    #[test]
    fn new_trims_title_and_notes() {
        let goal = Goal::new("  Run 5k  ", " pace notes ").unwrap();
        assert_eq!(goal.title, "Run 5k");
        assert_eq!(goal.notes, "pace notes");
        assert!(!goal.is_completed);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            Goal::new("   ", "").unwrap_err(),
            GoalValidationError::BlankTitle
        );
        assert_eq!(Goal::new("", "notes").unwrap_err(), GoalValidationError::BlankTitle);
    }

    #[test]
    fn update_helpers_preserve_unrelated_fields() {
        let goal = Goal::new("Read more", "one book a month").unwrap();
        let id = goal.id;
        let created_at = goal.created_at;

        let done = goal.with_completed(true);
        assert!(done.is_completed);
        assert_eq!(done.id, id);
        assert_eq!(done.title, "Read more");
        assert_eq!(done.notes, "one book a month");
        assert_eq!(done.created_at, created_at);

        let annotated = done.with_notes("two books");
        assert!(annotated.is_completed);
        assert_eq!(annotated.notes, "two books");
        assert_eq!(annotated.id, id);
    }
}
