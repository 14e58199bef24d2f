pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod reference;
pub mod storage;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
pub fn run() {
    use std::sync::Arc;
    use tauri::Manager;

    tracing_subscriber::fmt().with_target(false).init();

    tauri::Builder::default()
        .setup(|app| {
            let config = config::load_config().unwrap_or_default();

            // Without a home directory history only lives for this session.
            let store: Arc<dyn storage::KeyValueStore> = match storage::FileStore::in_home() {
                Some(store) => Arc::new(store),
                None => {
                    tracing::warn!("no home directory, search history won't be saved");
                    Arc::new(storage::MemoryStore::default())
                }
            };

            app.manage(commands::AppState {
                catalog: catalog::CatalogSync::new(config.catalog_base_url())?,
                history: tokio::sync::Mutex::new(history::HistoryStore::load(store)),
                assistant: assistant::Assistant::new(
                    config.assistant_endpoint.clone(),
                    config.assistant_api_key.clone(),
                ),
                table: reference::builtin_table(),
            });

            // Warm the catalog for the saved selection so the first view isn't empty.
            let handle = app.handle().clone();
            let selection = config.selection;
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<commands::AppState>();
                state
                    .catalog
                    .synchronize(&selection.version, selection.category)
                    .await;
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::catalog::list_versions,
            commands::catalog::sync_catalog,
            commands::catalog::search_catalog,
            commands::reference::search_commands,
            commands::history::get_history,
            commands::history::record_search,
            commands::history::record_copy,
            commands::history::clear_history,
            commands::history::suggest_history,
            commands::assistant::ask_assistant,
            commands::config::load_config,
            commands::config::save_selection,
        ])
        .run(tauri::generate_context!())
        .expect("failed to run mcref");
}
