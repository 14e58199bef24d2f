use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use super::locator::{locate, Platform};
use super::model::{CatalogCategory, CatalogSnapshot, Entry, DEFAULT_NAMESPACE};
use crate::error::{RefError, Result};

const USER_AGENT: &str = concat!("mcref/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// What the browser is currently showing.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    pub snapshot: CatalogSnapshot,
    pub loading: bool,
}

/// Result of one `synchronize` call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "snapshot")]
pub enum SyncOutcome {
    /// This call was the latest request and its snapshot is now held.
    Committed(CatalogSnapshot),
    /// A newer request was issued while this one was in flight; its result was dropped.
    Superseded,
}

/// Fetches versioned catalogs and holds the current snapshot.
///
/// Every call draws a request token; only the holder of the latest token may
/// commit, so a slow response for an old selection can't overwrite a newer one.
pub struct CatalogSync {
    client: reqwest::Client,
    base_url: String,
    latest: AtomicU64,
    loading: AtomicBool,
    snapshot: Mutex<CatalogSnapshot>,
}

/// Clears the loading flag when a request ends, including when its future is
/// dropped mid-fetch. Only the latest request may clear it.
struct LoadingGuard<'a> {
    sync: &'a CatalogSync,
    token: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.sync.latest.load(Ordering::SeqCst) == self.token {
            self.sync.loading.store(false, Ordering::SeqCst);
        }
    }
}

impl CatalogSync {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RefError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            latest: AtomicU64::new(0),
            loading: AtomicBool::new(false),
            snapshot: Mutex::new(CatalogSnapshot::default()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn state(&self) -> SyncState {
        SyncState {
            snapshot: self.snapshot().await,
            loading: self.loading.load(Ordering::SeqCst),
        }
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.lock().await.clone()
    }

    /// Load the catalog for a version/category, falling back to the bundled
    /// dataset on any failure. Never returns an error.
    pub async fn synchronize(
        &self,
        version_token: &str,
        category: CatalogCategory,
    ) -> SyncOutcome {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.store(true, Ordering::SeqCst);
        let _loading = LoadingGuard { sync: self, token };
        self.snapshot.lock().await.error = None;

        let url = locate(
            &self.base_url,
            Platform::from_token(version_token),
            version_token,
            category,
        );

        let snapshot = match self.fetch_entries(&url, category).await {
            Ok(entries) => {
                tracing::info!(%url, count = entries.len(), "catalog loaded");
                CatalogSnapshot::remote(entries)
            }
            Err(e) => {
                let message = format!("Failed to load catalog from {url}: {e}");
                tracing::warn!(%url, error = %e, "catalog unavailable, using offline data");
                CatalogSnapshot::fallback(Some(message))
            }
        };

        let mut held = self.snapshot.lock().await;
        if self.latest.load(Ordering::SeqCst) != token {
            tracing::debug!(%url, token, "dropping superseded catalog response");
            return SyncOutcome::Superseded;
        }
        *held = snapshot.clone();
        SyncOutcome::Committed(snapshot)
    }

    async fn fetch_entries(&self, url: &str, category: CatalogCategory) -> Result<Vec<Entry>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(RefError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        let entries = project_records(&records, category);

        if entries.is_empty() {
            return Err(RefError::Custom("catalog contains no named entries".into()));
        }
        Ok(entries)
    }
}

/// Best-effort mapping of raw catalog records. Values are kept as received.
/// Records without a non-empty `name` string are skipped; a `displayName`
/// that isn't a string falls back to the name.
pub fn project_records(
    records: &[serde_json::Value],
    category: CatalogCategory,
) -> Vec<Entry> {
    let entry_category = category.entry_category();
    records
        .iter()
        .filter_map(|record| {
            let name = record["name"].as_str().filter(|n| !n.is_empty())?;
            let display_name = record["displayName"].as_str().unwrap_or(name);
            Some(Entry {
                id: name.to_string(),
                display_name: display_name.to_string(),
                category: entry_category,
                namespace: Some(DEFAULT_NAMESPACE.to_string()),
            })
        })
        .collect()
}
