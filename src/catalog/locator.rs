use serde::{Deserialize, Serialize};

use super::model::{CatalogCategory, EntryCategory};

/// Default location of the versioned catalog files (minecraft-data).
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/master/data";

/// File fetched when a category has no dedicated catalog file.
const DEFAULT_FILE: &str = "items.json";

/// Game edition a command or catalog belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Java,
    Bedrock,
}

/// One entry of a platform's version selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionOption {
    pub label: &'static str,
    pub token: &'static str,
}

const JAVA_VERSIONS: &[VersionOption] = &[
    VersionOption { label: "1.20.4", token: "pc/1.20.4" },
    VersionOption { label: "1.20.1", token: "pc/1.20.1" },
    VersionOption { label: "1.19.4", token: "pc/1.19.4" },
    VersionOption { label: "1.18.2", token: "pc/1.18.2" },
    VersionOption { label: "1.16.5", token: "pc/1.16.5" },
    VersionOption { label: "1.12.2", token: "pc/1.12.2" },
];

const BEDROCK_VERSIONS: &[VersionOption] = &[
    VersionOption { label: "1.20.0", token: "bedrock/1.20.0" },
    VersionOption { label: "1.19.1", token: "bedrock/1.19.1" },
    VersionOption { label: "1.18.0", token: "bedrock/1.18.0" },
    VersionOption { label: "1.17.10", token: "bedrock/1.17.10" },
];

impl Platform {
    /// Platform a catalog version token belongs to (`bedrock/...` or `pc/...`).
    pub fn from_token(token: &str) -> Self {
        if token.starts_with("bedrock/") {
            Platform::Bedrock
        } else {
            Platform::Java
        }
    }

    /// Versions the catalog browser offers for this platform, newest first.
    pub fn versions(self) -> &'static [VersionOption] {
        match self {
            Platform::Java => JAVA_VERSIONS,
            Platform::Bedrock => BEDROCK_VERSIONS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Java => "Java Edition",
            Platform::Bedrock => "Bedrock Edition",
        }
    }

    /// Label for a version token, if the token belongs to this platform.
    pub fn version_label(self, token: &str) -> Option<&'static str> {
        self.versions()
            .iter()
            .find(|v| v.token == token)
            .map(|v| v.label)
    }
}

/// Catalog file name for a category.
pub fn file_name(category: CatalogCategory) -> &'static str {
    match category {
        CatalogCategory::Only(EntryCategory::Item) => "items.json",
        CatalogCategory::Only(EntryCategory::Entity) => "entities.json",
        CatalogCategory::Only(EntryCategory::Effect) => "effects.json",
        CatalogCategory::Only(EntryCategory::Biome) => "biomes.json",
        _ => DEFAULT_FILE,
    }
}

/// Maps a selection to the address of its catalog file under `base`.
///
/// The version token is taken as-is; it comes from [`Platform::versions`].
pub fn locate(
    base: &str,
    _platform: Platform,
    version_token: &str,
    category: CatalogCategory,
) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        version_token.trim_matches('/'),
        file_name(category)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_address() {
        let url = locate(
            DEFAULT_BASE_URL,
            Platform::Java,
            "pc/1.20.1",
            CatalogCategory::Only(EntryCategory::Entity),
        );
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/master/data/\
             pc/1.20.1/entities.json"
        );
    }

    #[test]
    fn test_unmapped_categories_use_items() {
        assert_eq!(file_name(CatalogCategory::All), "items.json");
        assert_eq!(file_name(CatalogCategory::Only(EntryCategory::Structure)), "items.json");
        assert_eq!(file_name(CatalogCategory::Only(EntryCategory::Effect)), "effects.json");
        assert_eq!(file_name(CatalogCategory::Only(EntryCategory::Biome)), "biomes.json");
    }

    #[test]
    fn test_locate_is_deterministic() {
        let base = "http://host/data/";
        let locate_bedrock =
            || locate(base, Platform::Bedrock, "bedrock/1.20.0", CatalogCategory::All);
        let a = locate_bedrock();
        let b = locate_bedrock();
        assert_eq!(a, b);
        assert_eq!(a, "http://host/data/bedrock/1.20.0/items.json");
    }

    #[test]
    fn test_version_tables() {
        assert_eq!(Platform::Java.version_label("pc/1.20.1"), Some("1.20.1"));
        assert_eq!(Platform::Java.version_label("bedrock/1.20.0"), None);
        assert!(Platform::Bedrock
            .versions()
            .iter()
            .all(|v| Platform::from_token(v.token) == Platform::Bedrock));
        assert!(Platform::Java
            .versions()
            .iter()
            .all(|v| Platform::from_token(v.token) == Platform::Java));
    }
}
