//! JSON-file implementation of [`MenuRepository`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use quickbite_app::ports::MenuRepository;
use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::document::{read_document, write_document};
use crate::error::StorageError;

/// Menu repository persisted as a single JSON array on disk.
///
/// Every mutation holds `writer` across its read-modify-write cycle, so two
/// overlapping requests cannot both work from the same stale snapshot.
/// A missing document reads as an empty menu and is created on first write.
pub struct JsonFileMenuRepository {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonFileMenuRepository {
    /// Create a repository over the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<MenuItem>, StorageError> {
        match read_document(&self.path).await {
            Err(StorageError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            other => other,
        }
    }

    async fn save(&self, items: &[MenuItem]) -> Result<(), StorageError> {
        write_document(&self.path, items).await
    }
}

/// Current time in milliseconds, bumped past the largest stored id.
fn next_id(items: &[MenuItem], now_millis: i64) -> MenuItemId {
    let now = MenuItemId::new(now_millis);
    match items.iter().map(|item| item.id).max() {
        Some(max) if max >= now => max.next(),
        _ => now,
    }
}

impl MenuRepository for JsonFileMenuRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send {
        async move { Ok(self.load().await?) }
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send {
        async move {
            let items = self.load().await?;
            Ok(items.into_iter().find(|item| item.id == id))
        }
    }

    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        async move {
            let _guard = self.writer.lock().await;
            let mut items = self.load().await?;

            let id = next_id(&items, chrono::Utc::now().timestamp_millis());
            let created = MenuItem::from_new(id, item);
            items.push(created.clone());

            self.save(&items).await?;
            tracing::debug!(%id, path = %self.path.display(), "appended menu item");
            Ok(created)
        }
    }

    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        async move {
            let _guard = self.writer.lock().await;
            let mut items = self.load().await?;

            let Some(stored) = items.iter_mut().find(|stored| stored.id == id) else {
                return Err(NotFoundError::item(id).into());
            };
            let merged = patch.apply(stored.clone())?;
            stored.clone_from(&merged);

            self.save(&items).await?;
            tracing::debug!(%id, path = %self.path.display(), "rewrote menu item");
            Ok(merged)
        }
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send {
        async move {
            let _guard = self.writer.lock().await;
            let mut items = self.load().await?;

            let before = items.len();
            items.retain(|item| item.id != id);
            if items.len() == before {
                return Err(NotFoundError::item(id).into());
            }

            self.save(&items).await?;
            Ok(())
        }
    }
}
