use serde::{Deserialize, Serialize};

/// Namespace stamped on every entry that came from the remote catalog.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Kind of identifier an entry names. `Item` covers both items and blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryCategory {
    Item,
    Entity,
    Effect,
    Structure,
    Biome,
}

/// Category selected in the catalog browser: everything, or one kind.
///
/// Crosses IPC as a flat string: `"all"`, `"item"`, `"entity"`, ...
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogCategory {
    #[default]
    All,
    #[serde(untagged)]
    Only(EntryCategory),
}

impl CatalogCategory {
    /// Whether an entry of `category` passes this selection.
    pub fn admits(self, category: EntryCategory) -> bool {
        match self {
            CatalogCategory::All => true,
            CatalogCategory::Only(wanted) => wanted == category,
        }
    }

    /// Category stamped on entries fetched for this selection.
    pub fn entry_category(self) -> EntryCategory {
        match self {
            CatalogCategory::All => EntryCategory::Item,
            CatalogCategory::Only(category) => category,
        }
    }
}

impl From<EntryCategory> for CatalogCategory {
    fn from(category: EntryCategory) -> Self {
        CatalogCategory::Only(category)
    }
}

/// One normalized identifier record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub display_name: String,
    pub category: EntryCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: EntryCategory,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            category,
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
        }
    }
}

/// Where the entries of a snapshot came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogSource {
    Remote,
    Fallback,
}

/// Wholesale state of the catalog after one synchronization attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub entries: Vec<Entry>,
    pub source: CatalogSource,
    pub error: Option<String>,
}

impl CatalogSnapshot {
    pub fn remote(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            source: CatalogSource::Remote,
            error: None,
        }
    }

    /// The fixed minimal catalog, tagged with why it is being shown.
    pub fn fallback(error: Option<String>) -> Self {
        Self {
            entries: super::fallback::fallback_entries(),
            source: CatalogSource::Fallback,
            error,
        }
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::fallback(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        let all: CatalogCategory = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, CatalogCategory::All);

        let entity: CatalogCategory = serde_json::from_str("\"entity\"").unwrap();
        assert_eq!(entity, CatalogCategory::Only(EntryCategory::Entity));

        assert_eq!(
            serde_json::to_string(&CatalogCategory::Only(EntryCategory::Biome)).unwrap(),
            "\"biome\""
        );
        assert_eq!(serde_json::to_string(&CatalogCategory::All).unwrap(), "\"all\"");
        assert!(serde_json::from_str::<CatalogCategory>("\"vehicle\"").is_err());
    }

    #[test]
    fn test_all_selection_stamps_items() {
        assert_eq!(CatalogCategory::All.entry_category(), EntryCategory::Item);
        assert_eq!(
            CatalogCategory::Only(EntryCategory::Effect).entry_category(),
            EntryCategory::Effect
        );
    }

    #[test]
    fn test_default_snapshot_is_fallback() {
        let snapshot = CatalogSnapshot::default();
        assert_eq!(snapshot.source, CatalogSource::Fallback);
        assert!(!snapshot.entries.is_empty());
        assert!(snapshot.error.is_none());
    }
}
