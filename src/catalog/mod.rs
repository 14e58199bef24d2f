//! Versioned identifier catalogs: the entry model, the bundled offline rows,
//! remote file addressing, and the synchronizer that keeps one snapshot live.

pub mod fallback;
pub mod locator;
pub mod model;
pub mod sync;

pub use locator::{locate, Platform, VersionOption, DEFAULT_BASE_URL};
pub use model::{CatalogCategory, CatalogSnapshot, CatalogSource, Entry, EntryCategory};
pub use sync::{CatalogSync, SyncOutcome, SyncState};
