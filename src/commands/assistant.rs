use tauri::State;

use super::AppState;
use crate::assistant::build_prompt;
use crate::catalog::Platform;
use crate::error::Result;

/// Ask the assistant about commands for the platform/version being browsed.
/// `None` means the assistant is unavailable or failed.
#[tauri::command]
pub async fn ask_assistant(
    question: String,
    platform: Platform,
    version: String,
    state: State<'_, AppState>,
) -> Result<Option<String>> {
    if question.trim().is_empty() {
        return Ok(None);
    }
    let label = platform.version_label(&version).unwrap_or(version.as_str());
    let prompt = build_prompt(&question, platform, label);
    Ok(state.assistant.ask(&prompt).await)
}
