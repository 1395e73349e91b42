//! Landing page — a human-readable index of the API.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use quickbite_app::ports::MenuRepository;

use crate::state::AppState;

/// One row of the endpoint listing.
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

static ENDPOINTS: [Endpoint; 6] = [
    Endpoint {
        method: "GET",
        path: "/api/menu",
        href: "/api/menu",
        description: "Retrieve all menu items.",
    },
    Endpoint {
        method: "GET",
        path: "/api/menu/:id",
        href: "/api/menu/1",
        description: "Retrieve a single menu item by ID (e.g., /api/menu/1).",
    },
    Endpoint {
        method: "GET",
        path: "/api/specials",
        href: "/api/specials",
        description: "Retrieve 4 random specials.",
    },
    Endpoint {
        method: "POST",
        path: "/api/menu",
        href: "/api/menu",
        description: "Create a new menu item. (Requires JSON body)",
    },
    Endpoint {
        method: "PUT",
        path: "/api/menu/:id",
        href: "/api/menu/1",
        description: "Update an existing menu item. (Requires JSON body)",
    },
    Endpoint {
        method: "DELETE",
        path: "/api/menu/:id",
        href: "/api/menu/1",
        description: "Delete a menu item properly.",
    },
];

/// Landing page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    endpoints: &'static [Endpoint],
    version: &'static str,
    environment: String,
}

impl HomeTemplate {
    #[must_use]
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            endpoints: &ENDPOINTS,
            version: env!("CARGO_PKG_VERSION"),
            environment: environment.into(),
        }
    }
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render landing page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /` — endpoint overview.
pub async fn index<R>(State(state): State<AppState<R>>) -> HomeTemplate
where
    R: MenuRepository + Send + Sync + 'static,
{
    HomeTemplate::new(state.environment.as_ref())
}
