use tauri::State;

use super::AppState;
use crate::catalog::Platform;
use crate::filter::filter_commands;
use crate::reference::{CommandFilter, CommandRecord};

#[tauri::command]
pub fn search_commands(
    platform: Platform,
    search: String,
    category: CommandFilter,
    deprecated_only: bool,
    state: State<'_, AppState>,
) -> Vec<CommandRecord> {
    filter_commands(&state.table, platform, search.trim(), category, deprecated_only)
        .into_iter()
        .cloned()
        .collect()
}
