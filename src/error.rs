//! Error types for DexGrid
//!
//! A load is all-or-nothing: any failure while fetching the summary page or
//! any single detail record aborts the whole load.

use thiserror::Error;

/// Main error type for DexGrid operations
#[derive(Error, Debug)]
pub enum DexGridError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from '{url}'")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed payload from '{url}': {detail}")]
    MalformedPayload { url: String, detail: String },

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Load cancelled")]
    Cancelled,
}

/// Result type alias for DexGrid operations
pub type Result<T> = std::result::Result<T, DexGridError>;

impl DexGridError {
    /// True when the failure came from the remote API rather than this host
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DexGridError::Http(_)
                | DexGridError::BadStatus { .. }
                | DexGridError::MalformedPayload { .. }
        )
    }
}
