//! # quickbite-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON menu API** (`/api/menu`, `/api/menu/{id}`, `/api/specials`)
//! - Serve a static **HTML landing page** at `/` listing the endpoints
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Allow cross-origin requests from anywhere
//!
//! ## Dependency rule
//! Depends on `quickbite-app` (for port traits and services) and `quickbite-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod home;
pub mod router;
pub mod state;
