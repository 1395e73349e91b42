//! In-test repository shared by the service tests.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::ports::MenuRepository;

#[derive(Default)]
pub struct InMemoryMenuRepo {
    store: Mutex<Vec<MenuItem>>,
    updates: AtomicUsize,
}

impl InMemoryMenuRepo {
    pub fn items(&self) -> Vec<MenuItem> {
        self.store.lock().unwrap().clone()
    }

    /// How many times `update` reached the repository.
    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl MenuRepository for InMemoryMenuRepo {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send {
        let result = self.items();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|item| item.id == id).cloned();
        async { Ok(result) }
    }

    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = store
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(MenuItemId::new(1), MenuItemId::next);
        let created = MenuItem::from_new(id, item);
        store.push(created.clone());
        async { Ok(created) }
    }

    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        let result = match store.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => patch.apply(stored.clone()).map(|merged| {
                stored.clone_from(&merged);
                merged
            }),
            None => Err(NotFoundError::item(id).into()),
        };
        async { result }
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send {
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|item| item.id != id);
        let result: Result<(), QuickBiteError> = if store.len() == before {
            Err(NotFoundError::item(id).into())
        } else {
            Ok(())
        };
        async { result }
    }
}
