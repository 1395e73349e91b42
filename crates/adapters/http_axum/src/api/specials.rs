//! JSON handler for the daily specials.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use quickbite_app::ports::MenuRepository;
use quickbite_domain::menu_item::MenuItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the specials endpoint.
pub enum ListResponse {
    Ok(Json<Vec<MenuItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/specials`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let specials = state
        .menu_service
        .specials()
        .await
        .map_err(ApiError::fallback("Failed to fetch specials"))?;
    Ok(ListResponse::Ok(Json(specials)))
}
