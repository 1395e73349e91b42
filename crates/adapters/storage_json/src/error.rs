//! Storage-specific error type for the JSON document backend.

use quickbite_domain::error::QuickBiteError;

/// Errors originating from the JSON document storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing or renaming the document failed.
    #[error("menu document I/O error")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of menu items.
    #[error("menu document is not valid JSON")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for QuickBiteError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
