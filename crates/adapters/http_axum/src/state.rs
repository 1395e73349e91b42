//! Shared application state for axum handlers.

use std::sync::Arc;

use quickbite_app::ports::MenuRepository;
use quickbite_app::services::menu_service::MenuService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Menu use-cases.
    pub menu_service: Arc<MenuService<R>>,
    /// Deployment name shown on the landing page (e.g. `development`).
    pub environment: Arc<str>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            menu_service: Arc::clone(&self.menu_service),
            environment: Arc::clone(&self.environment),
        }
    }
}

impl<R> AppState<R>
where
    R: MenuRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(menu_service: MenuService<R>, environment: impl Into<Arc<str>>) -> Self {
        Self {
            menu_service: Arc::new(menu_service),
            environment: environment.into(),
        }
    }
}
