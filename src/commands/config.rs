use crate::config::{self, AppConfig, Selection};
use crate::error::Result;

#[tauri::command]
pub async fn load_config() -> Option<AppConfig> {
    config::load_config()
}

#[tauri::command]
pub async fn save_selection(selection: Selection) -> Result<AppConfig> {
    config::save_selection(selection)
}
