use std::sync::Arc;

use tokio::sync::Mutex;

use crate::assistant::Assistant;
use crate::catalog::CatalogSync;
use crate::history::HistoryStore;
use crate::reference::CommandRecord;
use crate::storage::KeyValueStore;

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod history;
pub mod reference;

/// Managed Tauri state shared by every command.
pub struct AppState {
    pub catalog: CatalogSync,
    pub history: Mutex<HistoryStore<Arc<dyn KeyValueStore>>>,
    pub assistant: Assistant,
    pub table: Vec<CommandRecord>,
}
