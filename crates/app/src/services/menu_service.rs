//! Menu service — use-cases for browsing and managing the menu.

use rand::Rng;
use rand::seq::SliceRandom;

use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::ports::MenuRepository;

/// How many items the specials endpoint returns at most.
pub const SPECIALS_COUNT: usize = 4;

/// Application service for menu operations.
pub struct MenuService<R> {
    repo: R,
}

impl<R: MenuRepository> MenuService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every item on the menu.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, QuickBiteError> {
        self.repo.get_all().await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_item(&self, id: MenuItemId) -> Result<MenuItem, QuickBiteError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::item(id).into())
    }

    /// Pick up to [`SPECIALS_COUNT`] random items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn specials(&self) -> Result<Vec<MenuItem>, QuickBiteError> {
        let items = self.repo.get_all().await?;
        Ok(pick_specials(items, SPECIALS_COUNT, &mut rand::rng()))
    }

    /// Store a new item; the repository assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, QuickBiteError> {
        item.validate()?;
        let created = self.repo.create(item).await?;
        tracing::debug!(id = %created.id, title = %created.title, "menu item created");
        Ok(created)
    }

    /// Merge `patch` over the stored item and persist the result.
    ///
    /// The merge runs inside the repository so concurrent patches to
    /// different fields both survive. An empty patch writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::NotFound`] when no item with `id` exists,
    /// [`QuickBiteError::Validation`] if the merged item is invalid, or a
    /// storage error from the repository.
    pub async fn update_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, QuickBiteError> {
        if patch.is_empty() {
            return self.get_item(id).await;
        }
        let updated = self.repo.update(id, patch).await?;
        tracing::debug!(%id, "menu item updated");
        Ok(updated)
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_item(&self, id: MenuItemId) -> Result<(), QuickBiteError> {
        self.repo.delete(id).await?;
        tracing::debug!(%id, "menu item deleted");
        Ok(())
    }
}

/// Shuffle `items` uniformly and keep the first `count`.
pub fn pick_specials<G: Rng + ?Sized>(
    mut items: Vec<MenuItem>,
    count: usize,
    rng: &mut G,
) -> Vec<MenuItem> {
    items.shuffle(rng);
    items.truncate(count);
    items
}
