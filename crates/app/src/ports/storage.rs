//! Storage port — repository trait for menu persistence.

use std::future::Future;
use std::sync::Arc;

use quickbite_domain::error::QuickBiteError;
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

/// Repository for persisting and querying [`MenuItem`]s.
///
/// Implementations assign ids on [`create`](Self::create) and report a
/// missing record on [`update`](Self::update) / [`delete`](Self::delete) as
/// [`QuickBiteError::NotFound`].
///
/// [`update`](Self::update) must load, merge and store as one step: no other
/// write to the same backend may land between the read and the write.
pub trait MenuRepository {
    /// Get every stored item, in the backend's natural order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send;

    /// Get an item by its identifier.
    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send;

    /// Store a new item and return it with its assigned id.
    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send;

    /// Merge `patch` over the stored item and persist the result.
    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send;

    /// Delete an item by its identifier.
    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send;
}

impl<T: MenuRepository + Send + Sync> MenuRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send {
        (**self).get_by_id(id)
    }

    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        (**self).create(item)
    }

    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send {
        (**self).delete(id)
    }
}
