//! Goal lifecycle service.
//!
//! # Responsibility
//! - Own the persisted goal collection as its single writer.
//! - Enforce the creation boundary (blank titles never become goals).
//! - Assign identity and timestamps at creation time.
//!
//! # Invariants
//! - Every mutation persists synchronously before the call returns; a
//!   failed durable write degrades to memory-only and is logged, never
//!   surfaced as a blocking error.
//! - Identifier uniqueness holds across any operation sequence: ids are
//!   generated (UUID v4), never accepted from callers on create.

use crate::model::collection;
use crate::model::goal::{Goal, GoalId, GoalValidationError};
use crate::store::{KvStorage, PersistedStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized goal collection.
pub const GOALS_STORE_KEY: &str = "zen-goals";

pub type GoalResult<T> = Result<T, GoalError>;

/// Operation-level error for goal lifecycle APIs.
#[derive(Debug)]
pub enum GoalError {
    Validation(GoalValidationError),
    NotFound(GoalId),
}

impl Display for GoalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "goal not found: {id}"),
        }
    }
}

impl Error for GoalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<GoalValidationError> for GoalError {
    fn from(value: GoalValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Single-writer use-case service over the persisted goal collection.
pub struct GoalService {
    store: PersistedStore<Vec<Goal>>,
}

impl GoalService {
    /// Creates the service, loading prior goals from storage.
    ///
    /// Missing or unreadable stored state starts the service with an empty
    /// collection; that fallback is handled inside the persisted store.
    pub fn new(storage: KvStorage) -> Self {
        Self {
            store: PersistedStore::load(storage, GOALS_STORE_KEY, Vec::new()),
        }
    }

    /// Creates a goal from user input and prepends it to the collection.
    ///
    /// # Contract
    /// - Title and notes are trimmed; a blank title is rejected.
    /// - The new goal starts uncompleted and appears first in the list.
    /// - Returns the generated stable goal ID.
    pub fn add_goal(
        &mut self,
        title: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> GoalResult<GoalId> {
        let goal = Goal::new(title, notes)?;
        let id = goal.id;
        let next = collection::add(goal, self.goals());
        self.persist(next);
        info!("event=goal_add module=service status=ok id={id}");
        Ok(id)
    }

    /// Deletes the goal matching `id`. Irreversible; no tombstone is kept.
    pub fn remove_goal(&mut self, id: GoalId) -> GoalResult<()> {
        self.ensure_exists(id)?;
        let next = collection::remove(id, self.goals());
        self.persist(next);
        info!("event=goal_remove module=service status=ok id={id}");
        Ok(())
    }

    /// Flips the completion flag of the goal matching `id`.
    ///
    /// Returns the new completion state.
    pub fn toggle_completed(&mut self, id: GoalId) -> GoalResult<bool> {
        self.ensure_exists(id)?;
        let next = collection::toggle_completed(id, self.goals());
        let is_completed = next
            .iter()
            .find(|goal| goal.id == id)
            .map(|goal| goal.is_completed)
            .unwrap_or_default();
        self.persist(next);
        info!("event=goal_toggle module=service status=ok id={id} completed={is_completed}");
        Ok(is_completed)
    }

    /// Replaces the notes of the goal matching `id`.
    ///
    /// Completion state and all other fields are untouched.
    pub fn update_notes(&mut self, id: GoalId, notes: &str) -> GoalResult<()> {
        self.ensure_exists(id)?;
        let next = collection::update_notes(id, notes, self.goals());
        self.persist(next);
        info!("event=goal_update_notes module=service status=ok id={id}");
        Ok(())
    }

    /// Current goals, newest first.
    pub fn goals(&self) -> &[Goal] {
        self.store.value()
    }

    /// Number of completed goals.
    pub fn completed_count(&self) -> usize {
        collection::completed_count(self.goals())
    }

    /// Completed share as a percentage; `0.0` when no goals exist.
    pub fn progress_percent(&self) -> f64 {
        collection::progress_percent(self.goals())
    }

    fn ensure_exists(&self, id: GoalId) -> GoalResult<()> {
        if collection::contains(id, self.goals()) {
            Ok(())
        } else {
            Err(GoalError::NotFound(id))
        }
    }

    // A failed durable write is a degradation, not an operation failure:
    // the in-memory collection already carries the change.
    fn persist(&mut self, next: Vec<Goal>) {
        if let Err(err) = self.store.set(next) {
            warn!("event=goal_persist module=service status=degraded error={err}");
        }
    }
}
