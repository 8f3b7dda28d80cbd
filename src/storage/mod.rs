//! Durable local storage shim.
//!
//! This module handles:
//! - The [`Storage`] key/value contract (string keys, string values)
//! - In-memory backend for tests and ephemeral sessions
//! - File backend persisting one file per key
//!
//! An absent key is never an error: readers fall back to a default value,
//! mirroring browser local-storage semantics.

pub mod file;
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StorageError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Well-known storage keys.
pub mod keys {
    /// Unconfirmed slip entries.
    pub const ACTIVE_BETS: &str = "activeBets";
    /// Confirmed/resolved wagers.
    pub const BET_HISTORY: &str = "betHistory";
    /// Wallet state record.
    pub const USER_STORE: &str = "userStore";
    /// Deposit/withdrawal records.
    pub const TRANSACTIONS: &str = "transactions";
    /// Wallet-level bet records.
    pub const BETS: &str = "bets";
}

/// Key → string map with durable writes.
pub trait Storage: Send + Sync {
    /// Read the raw value for a key. Absent key returns `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw value for a key.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a key, falling back to the given value when the key
/// is absent or holds a value that no longer parses.
pub fn load_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, fallback: T) -> T {
    match storage.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("stored value for {key} is unreadable, using default: {e}");
                fallback
            }
        },
        None => fallback,
    }
}

/// Read and deserialize a key, falling back to the type's default.
pub fn load_or_default<T>(storage: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    load_or(storage, key, T::default())
}

/// Serialize and write a value under a key. Failures are logged and swallowed:
/// a full disk must not take the in-memory state down with it.
pub fn save<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("failed to serialize value for {key}: {e}");
            return;
        }
    };

    if let Err(e) = storage.set(key, &raw) {
        warn!("failed to persist {key}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_or_default_on_absent_key() {
        let storage = MemoryStorage::new();
        let value: Vec<String> = load_or_default(&storage, keys::ACTIVE_BETS);
        assert!(value.is_empty());
    }

    #[test]
    fn load_or_default_on_corrupt_value() {
        let storage = MemoryStorage::new();
        storage.set(keys::BET_HISTORY, "not json {{").unwrap();

        let value: Vec<u32> = load_or_default(&storage, keys::BET_HISTORY);
        assert!(value.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        save(&storage, keys::TRANSACTIONS, &vec![1u32, 2, 3]);

        let value: Vec<u32> = load_or_default(&storage, keys::TRANSACTIONS);
        assert_eq!(value, vec![1, 2, 3]);
    }
}
