//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod menu;
#[allow(clippy::missing_errors_doc)]
pub mod specials;

use axum::Router;
use axum::routing::get;

use quickbite_app::ports::MenuRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: MenuRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/menu", get(menu::list::<R>).post(menu::create::<R>))
        .route(
            "/menu/{id}",
            get(menu::get::<R>)
                .put(menu::update::<R>)
                .delete(menu::delete::<R>),
        )
        .route("/specials", get(specials::list::<R>))
}
