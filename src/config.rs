use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogCategory, Platform, DEFAULT_BASE_URL};
use crate::error::{RefError, Result};

/// Last selection in the browser, restored on the next launch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub platform: Platform,
    pub version: String,
    pub category: CatalogCategory,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            platform: Platform::Java,
            version: "pc/1.20.1".to_string(),
            category: CatalogCategory::All,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub version: u32,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            selection: Selection::default(),
            catalog_base_url: None,
            assistant_endpoint: None,
            assistant_api_key: None,
        }
    }
}

impl AppConfig {
    pub fn catalog_base_url(&self) -> &str {
        self.catalog_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// `~/.mcref`, where config and stored state live.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mcref"))
}

fn config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.json"))
}

/// Read a config file. Missing or unparsable files yield `None`.
pub fn load_config_from(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_config() -> Option<AppConfig> {
    load_config_from(&config_path()?)
}

/// Remember the current selection, keeping the rest of the config.
pub fn save_selection(selection: Selection) -> Result<AppConfig> {
    let path = config_path()
        .ok_or_else(|| RefError::Custom("Cannot find home directory".into()))?;

    let mut config = load_config_from(&path).unwrap_or_default();
    config.selection = selection;
    save_config_to(&path, &config)?;

    Ok(config)
}
