//! Whole-document reads and writes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use quickbite_domain::menu_item::MenuItem;

use crate::error::StorageError;

/// Read and parse the menu document at `path`.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if the file cannot be read (including when it
/// does not exist) and [`StorageError::Json`] if it is not a JSON array of
/// menu items.
pub async fn read_document(path: &Path) -> Result<Vec<MenuItem>, StorageError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Replace the document at `path` with `items`, pretty-printed.
///
/// The content is written to a sibling temporary file first and then renamed
/// over the target, so readers see either the old or the new document.
///
/// # Errors
///
/// Returns [`StorageError`] if serialisation or any file operation fails.
pub async fn write_document(path: &Path, items: &[MenuItem]) -> Result<(), StorageError> {
    let mut bytes = serde_json::to_vec_pretty(items)?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("menu.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
