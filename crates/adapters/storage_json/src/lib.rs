//! # quickbite-adapter-storage-json
//!
//! JSON-document persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `MenuRepository` port from `quickbite-app::ports::storage`
//! - Read the whole document on every query, rewrite it on every mutation
//! - Serialise writers so concurrent mutations cannot clobber each other
//! - Assign millisecond-timestamp ids to new items
//!
//! ## Dependency rule
//! Depends on `quickbite-app` (for port traits) and `quickbite-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod document;
mod error;
mod menu_repo;

pub use document::{read_document, write_document};
pub use error::StorageError;
pub use menu_repo::JsonFileMenuRepository;
