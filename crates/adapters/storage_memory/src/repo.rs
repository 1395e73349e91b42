//! [`MenuRepository`] backed by a `Vec` in process memory.

use std::future::Future;
use std::sync::{PoisonError, RwLock};

use quickbite_app::ports::MenuRepository;
use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::builtin::builtin_menu;

/// In-memory menu repository.
///
/// Items keep insertion order. New ids continue from the largest id ever
/// seen, so ids are never reused after a delete.
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    items: Vec<MenuItem>,
    last_id: Option<MenuItemId>,
}

impl InMemoryMenuRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `items` as-is.
    #[must_use]
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let last_id = items.iter().map(|item| item.id).max();
        Self {
            state: RwLock::new(State { items, last_id }),
        }
    }

    /// Create a repository preloaded with the built-in menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_items(builtin_menu())
    }

    fn read<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send {
        let result = self.read(|state| state.items.clone());
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send {
        let result = self.read(|state| state.items.iter().find(|item| item.id == id).cloned());
        async { Ok(result) }
    }

    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        let created = self.write(|state| {
            let id = state.last_id.map_or(MenuItemId::new(1), MenuItemId::next);
            let created = MenuItem::from_new(id, item);
            state.last_id = Some(id);
            state.items.push(created.clone());
            created
        });
        async { Ok(created) }
    }

    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        let result: Result<MenuItem, QuickBiteError> = self.write(|state| {
            let stored = state
                .items
                .iter_mut()
                .find(|stored| stored.id == id)
                .ok_or_else(|| NotFoundError::item(id))?;
            let merged = patch.apply(stored.clone())?;
            stored.clone_from(&merged);
            Ok(merged)
        });
        async { result }
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send {
        let result: Result<(), QuickBiteError> = self.write(|state| {
            let before = state.items.len();
            state.items.retain(|item| item.id != id);
            if state.items.len() == before {
                Err(NotFoundError::item(id).into())
            } else {
                Ok(())
            }
        });
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(title: &str) -> NewMenuItem {
        NewMenuItem::builder()
            .title(title)
            .price(3.5)
            .category("sides")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_builtin_menu() {
        let repo = InMemoryMenuRepository::builtin();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all, builtin_menu());
    }

    #[tokio::test]
    async fn should_create_and_retrieve_item() {
        let repo = InMemoryMenuRepository::new();
        let created = repo.create(new_item("Fries")).await.unwrap();
        assert_eq!(created.id, MenuItemId::new(1));

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_continue_ids_after_builtin_menu() {
        let repo = InMemoryMenuRepository::builtin();
        let created = repo.create(new_item("Onion Rings")).await.unwrap();
        assert_eq!(created.id, MenuItemId::new(10));
    }

    #[tokio::test]
    async fn should_not_reuse_id_of_deleted_item() {
        let repo = InMemoryMenuRepository::new();
        let first = repo.create(new_item("Fries")).await.unwrap();
        let second = repo.create(new_item("Slaw")).await.unwrap();
        repo.delete(second.id).await.unwrap();

        let third = repo.create(new_item("Beans")).await.unwrap();
        assert_ne!(third.id, second.id);
        assert_ne!(third.id, first.id);
    }

    #[tokio::test]
    async fn should_return_none_when_item_not_found() {
        let repo = InMemoryMenuRepository::builtin();
        let result = repo.get_by_id(MenuItemId::new(999_999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_update_only_patched_fields() {
        let repo = InMemoryMenuRepository::builtin();
        let before = repo.get_by_id(MenuItemId::new(2)).await.unwrap().unwrap();
        let patch = MenuItemPatch {
            title: Some("Triple Diner".to_string()),
            ..MenuItemPatch::default()
        };

        let updated = repo.update(before.id, patch).await.unwrap();

        assert_eq!(updated.title, "Triple Diner");
        assert!((updated.price - before.price).abs() < f64::EPSILON);
        assert_eq!(updated.desc, before.desc);
        let fetched = repo.get_by_id(before.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_item() {
        let repo = InMemoryMenuRepository::new();
        let patch = MenuItemPatch {
            price: Some(1.0.into()),
            ..MenuItemPatch::default()
        };
        let result = repo.update(MenuItemId::new(5), patch).await;
        assert!(matches!(result, Err(QuickBiteError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_leave_item_untouched_when_patch_is_invalid() {
        let repo = InMemoryMenuRepository::builtin();
        let before = repo.get_by_id(MenuItemId::new(1)).await.unwrap().unwrap();
        let patch = MenuItemPatch {
            title: Some(String::new()),
            ..MenuItemPatch::default()
        };

        let result = repo.update(before.id, patch).await;

        assert!(matches!(result, Err(QuickBiteError::Validation(_))));
        let fetched = repo.get_by_id(before.id).await.unwrap().unwrap();
        assert_eq!(fetched, before);
    }

    #[tokio::test]
    async fn should_delete_item_and_report_missing_afterwards() {
        let repo = InMemoryMenuRepository::builtin();
        let id = MenuItemId::new(3);

        repo.delete(id).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 8);

        let again = repo.delete(id).await;
        assert!(matches!(again, Err(QuickBiteError::NotFound(_))));
    }
}
