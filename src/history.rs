use crate::storage::KeyValueStore;

/// Storage key the search history is saved under.
pub const HISTORY_KEY: &str = "search_history";

/// Maximum number of remembered terms.
pub const MAX_HISTORY: usize = 10;

/// Recently searched or copied terms, most recent first.
///
/// Loaded once at startup; every mutation is written back through the store.
pub struct HistoryStore<S> {
    store: S,
    terms: Vec<String>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load saved history. A missing or corrupt value starts an empty list.
    pub fn load(store: S) -> Self {
        let terms = store
            .read(HISTORY_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .map(sanitize)
            .unwrap_or_default();
        Self { store, terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Move `term` to the front, dropping the oldest entries past the cap.
    pub fn record(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.terms.retain(|existing| existing != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_HISTORY);
        self.save();
    }

    pub fn clear(&mut self) {
        self.terms.clear();
        self.save();
    }

    fn save(&self) {
        let json = match serde_json::to_string(&self.terms) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize search history");
                return;
            }
        };
        if let Err(e) = self.store.write(HISTORY_KEY, &json) {
            tracing::warn!(error = %e, "could not save search history");
        }
    }
}

// A hand-edited file may hold blanks, duplicates or too many entries.
fn sanitize(raw: Vec<String>) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(MAX_HISTORY);
    for term in raw {
        let term = term.trim();
        if term.is_empty() || terms.iter().any(|t| t == term) {
            continue;
        }
        terms.push(term.to_string());
        if terms.len() == MAX_HISTORY {
            break;
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RefError, Result};
    use crate::storage::{FileStore, MemoryStore};
    use std::collections::HashSet;
    use std::sync::Arc;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(RefError::Custom("disk full".into()))
        }
    }

    fn seeded(value: &str) -> MemoryStore {
        let store = MemoryStore::default();
        store.write(HISTORY_KEY, value).unwrap();
        store
    }

    #[test]
    fn test_record_trims_and_moves_to_front() {
        let mut history = HistoryStore::load(MemoryStore::default());
        history.record("  diamond ");
        history.record("stone");
        history.record("   ");
        assert_eq!(history.terms(), ["stone", "diamond"]);

        history.record("diamond");
        assert_eq!(history.terms(), ["diamond", "stone"]);
    }

    #[test]
    fn test_record_twice_is_idempotent() {
        let mut history = HistoryStore::load(MemoryStore::default());
        history.record("creeper");
        history.record("creeper");
        assert_eq!(history.terms(), ["creeper"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut history = HistoryStore::load(MemoryStore::default());
        history.record("Stone");
        history.record("stone");
        assert_eq!(history.terms(), ["stone", "Stone"]);
    }

    #[test]
    fn test_cap_keeps_most_recent() {
        let mut history = HistoryStore::load(MemoryStore::default());
        for i in 0..25 {
            history.record(&format!("term{}", i % 13));
            let terms = history.terms();
            assert!(terms.len() <= MAX_HISTORY);
            let unique: HashSet<_> = terms.iter().collect();
            assert_eq!(unique.len(), terms.len());
            assert_eq!(terms[0], format!("term{}", i % 13));
        }
        assert_eq!(history.terms().len(), MAX_HISTORY);
        assert_eq!(history.terms()[MAX_HISTORY - 1], "term2");
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = Arc::new(MemoryStore::default());
        let mut history = HistoryStore::load(store.clone());

        history.record("zombie");
        history.record("diamond");
        assert_eq!(store.read(HISTORY_KEY).as_deref(), Some(r#"["diamond","zombie"]"#));

        history.clear();
        assert!(history.terms().is_empty());
        assert_eq!(store.read(HISTORY_KEY).as_deref(), Some("[]"));

        let reloaded = HistoryStore::load(store);
        assert!(reloaded.terms().is_empty());
    }

    #[test]
    fn test_corrupt_or_missing_history_starts_empty() {
        assert!(HistoryStore::load(MemoryStore::default()).terms().is_empty());
        assert!(HistoryStore::load(seeded("{not json")).terms().is_empty());
        assert!(HistoryStore::load(seeded(r#"{"terms": ["a"]}"#)).terms().is_empty());
        assert!(HistoryStore::load(seeded(r#"[1, 2]"#)).terms().is_empty());
    }

    #[test]
    fn test_loaded_history_is_sanitized() {
        let history = HistoryStore::load(seeded(r#"[" a ", "", "b", "a", "c"]"#));
        assert_eq!(history.terms(), ["a", "b", "c"]);
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut history = HistoryStore::load(FailingStore);
        history.record("stone");
        assert_eq!(history.terms(), ["stone"]);
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut history = HistoryStore::load(FileStore::new(dir.path()));
            history.record("oak_log");
            history.record("plains");
        }
        let history = HistoryStore::load(FileStore::new(dir.path()));
        assert_eq!(history.terms(), ["plains", "oak_log"]);
    }
}
