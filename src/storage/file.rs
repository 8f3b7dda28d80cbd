//! File-backed storage backend.
//!
//! Each key maps to one file under the data directory, written whole on every
//! mutation. Writes are synchronous and unbuffered, like the browser storage
//! this stands in for.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageError;

use super::Storage;

/// Storage backend persisting each key as `{dir}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at the given directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let storage = FileStorage::new(dir.path()).unwrap();
            storage.set("activeBets", "[]").unwrap();
        }

        let reopened = FileStorage::new(dir.path()).unwrap();
        assert_eq!(reopened.get("activeBets").as_deref(), Some("[]"));
    }

    #[test]
    fn absent_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.get("missing").is_none());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.remove("missing").is_ok());
    }
}
