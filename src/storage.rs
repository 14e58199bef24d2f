use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{RefError, Result};

/// Scoped key-value storage for small persisted client state.
pub trait KeyValueStore: Send + Sync {
    /// Stored value for `key`, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// One file per key under a directory (`~/.mcref/storage/<key>.json`).
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the user's home directory, if one can be found.
    pub fn in_home() -> Option<Self> {
        crate::config::app_dir().map(|dir| Self::new(dir.join("storage")))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Process-local store, used when no home directory is available.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| RefError::Custom("in-memory store is poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.read("search_history").is_none());

        store.write("search_history", "[\"stone\"]").unwrap();
        assert_eq!(store.read("search_history").as_deref(), Some("[\"stone\"]"));
        assert!(dir.path().join("nested").join("search_history.json").exists());
    }

    #[test]
    fn test_poisoned_memory_store_reports_write_failure() {
        let store = Arc::new(MemoryStore::default());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _values = poisoner.values.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.write("search_history", "[]").is_err());
        assert!(store.read("search_history").is_none());
    }
}
