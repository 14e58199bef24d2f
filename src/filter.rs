use crate::catalog::{CatalogCategory, CatalogSnapshot, Entry, Platform};
use crate::reference::{CommandFilter, CommandRecord};

/// Most catalog rows handed to the browser at once.
pub const DISPLAY_LIMIT: usize = 450;

/// Case-insensitive substring test. An empty query matches everything.
fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Commands visible for a platform under the current search and filters.
///
/// Names match case-insensitively, descriptions literally. Only commands whose
/// deprecation flag equals `show_deprecated_only` are kept. Input order is preserved.
pub fn filter_commands<'a>(
    table: &'a [CommandRecord],
    platform: Platform,
    search: &str,
    category: CommandFilter,
    show_deprecated_only: bool,
) -> Vec<&'a CommandRecord> {
    table
        .iter()
        .filter(|record| {
            let Some(detail) = record.detail(platform) else {
                return false;
            };
            let text_match = search.is_empty()
                || contains_ignore_case(&record.name, search)
                || record.description.contains(search);
            text_match
                && detail.deprecated == show_deprecated_only
                && category.admits(record.category)
        })
        .collect()
}

/// Catalog entries matching the search on id or display name, in snapshot order.
pub fn filter_entries<'a>(
    snapshot: &'a CatalogSnapshot,
    search: &str,
    category: CatalogCategory,
) -> Vec<&'a Entry> {
    snapshot
        .entries
        .iter()
        .filter(|entry| {
            let text_match = contains_ignore_case(&entry.id, search)
                || contains_ignore_case(&entry.display_name, search);
            text_match && category.admits(entry.category)
        })
        .collect()
}

/// First `limit` matches plus the full match count.
pub fn cap_for_display<T>(matches: Vec<T>, limit: usize) -> (Vec<T>, usize) {
    let total = matches.len();
    let mut shown = matches;
    shown.truncate(limit);
    (shown, total)
}

/// History entries to offer while typing. The exact current text isn't offered back.
pub fn suggest(history: &[String], search: &str) -> Vec<String> {
    if search.trim().is_empty() {
        return history.to_vec();
    }
    let query = search.to_lowercase();
    history
        .iter()
        .filter(|term| {
            let term = term.to_lowercase();
            term.contains(&query) && term != query
        })
        .cloned()
        .collect()
}
