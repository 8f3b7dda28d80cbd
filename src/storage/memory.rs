//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

use super::Storage;

/// Storage backend holding values in a process-local map.
///
/// Cloning shares the underlying map, so a "page reload" can be simulated by
/// building fresh stores over a clone of the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("storage map poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .expect("storage map poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .expect("storage map poisoned")
            .remove(key);
        Ok(())
    }
}
