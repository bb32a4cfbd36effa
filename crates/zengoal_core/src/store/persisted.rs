//! Write-through persisted value container.
//!
//! # Responsibility
//! - Load one serialized value from durable storage at construction.
//! - Keep the current value in memory and write every change back
//!   synchronously.
//!
//! # Invariants
//! - A missing or unparseable stored value yields the caller's default,
//!   never an error.
//! - `set` applies the in-memory update even when the durable write fails;
//!   the failure is logged and returned for the caller to note.
//! - Single writer per key by construction; no locking.

use crate::store::{KvStorage, StoreError, StoreResult};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable container for one serialized value under a fixed key.
pub struct PersistedStore<T> {
    storage: KvStorage,
    key: String,
    value: T,
}

impl<T> PersistedStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the stored value for `key`, falling back to `default`.
    ///
    /// The fallback covers every read-side problem: no value stored yet,
    /// malformed JSON, or a previously stored shape this version cannot
    /// interpret. None of these fail construction; a log line records which
    /// path was taken.
    pub fn load(storage: KvStorage, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    info!("event=store_load module=store status=ok key={key}");
                    value
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=fallback key={key} reason=parse_failed error={err}"
                    );
                    default
                }
            },
            Ok(None) => {
                info!("event=store_load module=store status=fallback key={key} reason=absent");
                default
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback key={key} reason=read_failed error={err}"
                );
                default
            }
        };

        Self {
            storage,
            key,
            value,
        }
    }

    /// Current in-memory value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value and writes it through to durable storage.
    ///
    /// The in-memory value is replaced unconditionally. When serialization
    /// or the durable write fails, the error is logged and returned, and
    /// the store keeps operating memory-only for this change; callers treat
    /// it as a degradation, not a blocking failure.
    pub fn set(&mut self, value: T) -> StoreResult<()> {
        self.value = value;

        let serialized = match serde_json::to_string(&self.value) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!(
                    "event=store_write module=store status=error key={} reason=serialize_failed error={err}",
                    self.key
                );
                return Err(StoreError::Serialize(err));
            }
        };

        if let Err(err) = self.storage.put(&self.key, &serialized) {
            error!(
                "event=store_write module=store status=error key={} reason=write_failed error={err}",
                self.key
            );
            return Err(err);
        }

        Ok(())
    }
}
