use serde::Serialize;

/// All errors that can occur while syncing catalogs or persisting state.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("{0}")]
    Custom(String),
}

// Tauri requires error types to implement Serialize for IPC transport.
impl Serialize for RefError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RefError>;
