use tauri::State;

use super::AppState;
use crate::error::Result;
use crate::filter::suggest;

#[tauri::command]
pub async fn get_history(state: State<'_, AppState>) -> Result<Vec<String>> {
    Ok(state.history.lock().await.terms().to_vec())
}

/// Remember a submitted search and return the updated history.
#[tauri::command]
pub async fn record_search(term: String, state: State<'_, AppState>) -> Result<Vec<String>> {
    let mut history = state.history.lock().await;
    history.record(&term);
    Ok(history.terms().to_vec())
}

/// The frontend writes the clipboard itself; copied identifiers and syntax
/// strings are remembered like searches.
#[tauri::command]
pub async fn record_copy(text: String, state: State<'_, AppState>) -> Result<Vec<String>> {
    let mut history = state.history.lock().await;
    history.record(&text);
    Ok(history.terms().to_vec())
}

#[tauri::command]
pub async fn clear_history(state: State<'_, AppState>) -> Result<()> {
    state.history.lock().await.clear();
    Ok(())
}

#[tauri::command]
pub async fn suggest_history(search: String, state: State<'_, AppState>) -> Result<Vec<String>> {
    let history = state.history.lock().await;
    Ok(suggest(history.terms(), &search))
}
