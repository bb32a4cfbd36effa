//! Domain model for the goal tracker.
//!
//! # Responsibility
//! - Define the canonical `Goal` record and its creation/update helpers.
//! - Provide the pure collection transformations applied by services.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId`.
//! - Collection transformations never mutate their input; they return a new
//!   ordered sequence.

pub mod collection;
pub mod goal;
