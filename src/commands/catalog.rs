use serde::Serialize;
use tauri::State;

use super::AppState;
use crate::catalog::{CatalogCategory, CatalogSource, Entry, Platform, SyncOutcome, VersionOption};
use crate::error::Result;
use crate::filter::{cap_for_display, filter_entries, DISPLAY_LIMIT};

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub entries: Vec<Entry>,
    pub total: usize,
    pub source: CatalogSource,
    pub error: Option<String>,
    pub loading: bool,
}

#[tauri::command]
pub fn list_versions(platform: Platform) -> Vec<VersionOption> {
    platform.versions().to_vec()
}

/// Reload the catalog for a new version/category selection.
#[tauri::command]
pub async fn sync_catalog(
    version: String,
    category: CatalogCategory,
    state: State<'_, AppState>,
) -> Result<SyncOutcome> {
    Ok(state.catalog.synchronize(&version, category).await)
}

/// Filter the held catalog, capped to [`DISPLAY_LIMIT`] rows.
#[tauri::command]
pub async fn search_catalog(
    search: String,
    category: CatalogCategory,
    state: State<'_, AppState>,
) -> Result<CatalogView> {
    let current = state.catalog.state().await;
    let matches = filter_entries(&current.snapshot, search.trim(), category);
    let (shown, total) = cap_for_display(matches, DISPLAY_LIMIT);

    Ok(CatalogView {
        total,
        entries: shown.into_iter().cloned().collect(),
        source: current.snapshot.source,
        error: current.snapshot.error.clone(),
        loading: current.loading,
    })
}
