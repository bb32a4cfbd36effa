//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure collection transformations and the persisted store
//!   into goal lifecycle APIs.
//! - Keep shell/UI layers decoupled from storage details.

pub mod goal_service;
