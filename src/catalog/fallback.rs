use super::model::{Entry, EntryCategory};

/// Offline rows shown whenever the remote catalog can't be loaded.
const FALLBACK_ROWS: &[(&str, &str, EntryCategory)] = &[
    ("diamond", "钻石", EntryCategory::Item),
    ("diamond_sword", "钻石剑", EntryCategory::Item),
    ("stone", "石头", EntryCategory::Item),
    ("oak_log", "橡木原木", EntryCategory::Item),
    ("zombie", "僵尸", EntryCategory::Entity),
    ("creeper", "苦力怕", EntryCategory::Entity),
    ("speed", "速度", EntryCategory::Effect),
    ("night_vision", "夜视", EntryCategory::Effect),
    ("plains", "平原", EntryCategory::Biome),
    ("desert", "沙漠", EntryCategory::Biome),
    ("village", "村庄", EntryCategory::Structure),
];

/// The fixed minimal catalog. Always non-empty.
pub fn fallback_entries() -> Vec<Entry> {
    FALLBACK_ROWS
        .iter()
        .map(|&(id, name, category)| Entry::new(id, name, category))
        .collect()
}
