//! JSON REST handlers for menu items.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use quickbite_app::ports::MenuRepository;
use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};
use quickbite_domain::price::PriceInput;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a menu item. Any `id` sent by the client is
/// ignored.
#[derive(Deserialize)]
pub struct CreateMenuItemRequest {
    pub title: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
}

impl CreateMenuItemRequest {
    fn into_new_item(self) -> Result<NewMenuItem, QuickBiteError> {
        let mut builder = NewMenuItem::builder();
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(price) = self.price {
            builder = builder.price(price);
        }
        if let Some(category) = self.category {
            builder = builder.category(category);
        }
        if let Some(img) = self.img {
            builder = builder.img(img);
        }
        if let Some(desc) = self.desc {
            builder = builder.desc(desc);
        }
        builder.build()
    }
}

/// Request body for updating a menu item. Omitted fields keep their value.
#[derive(Deserialize)]
pub struct UpdateMenuItemRequest {
    pub title: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
}

impl From<UpdateMenuItemRequest> for MenuItemPatch {
    fn from(req: UpdateMenuItemRequest) -> Self {
        Self {
            title: req.title,
            price: req.price,
            category: req.category,
            img: req.img,
            desc: req.desc,
        }
    }
}

/// Confirmation body for the delete endpoint.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
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

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<MenuItem>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<MenuItem>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integer cannot name any item.
fn parse_id(raw: &str) -> Result<MenuItemId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(QuickBiteError::from(NotFoundError::item(raw))))
}

/// `GET /api/menu`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let items = state
        .menu_service
        .list_items()
        .await
        .map_err(ApiError::fallback("Failed to fetch menu"))?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /api/menu/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let item = state
        .menu_service
        .get_item(id)
        .await
        .map_err(ApiError::fallback("Error fetching item"))?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /api/menu`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<CreateMenuItemRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let item = req.into_new_item()?;
    let created = state
        .menu_service
        .create_item(item)
        .await
        .map_err(ApiError::fallback("Failed to create item"))?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/menu/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateMenuItemRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let Json(req) = body?;
    let updated = state
        .menu_service
        .update_item(id, req.into())
        .await
        .map_err(ApiError::fallback("Failed to update item"))?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/menu/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    R: MenuRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let id = parse_id(&id)?;
    state
        .menu_service
        .delete_item(id)
        .await
        .map_err(ApiError::fallback("Failed to delete item"))?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: "Item deleted successfully",
    })))
}
