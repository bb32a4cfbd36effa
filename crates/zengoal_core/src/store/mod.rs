//! Durable storage for tracker state.
//!
//! # Responsibility
//! - Open and bootstrap the SQLite-backed key-value storage.
//! - Provide the generic write-through container used by services.
//!
//! # Invariants
//! - Storage is opened and bootstrapped before any key is read or written.
//! - A missing or unparseable stored value degrades to the caller's default
//!   instead of failing the application.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod persisted;

pub use kv::KvStorage;
pub use persisted::PersistedStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level failure for open, read, and write paths.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
