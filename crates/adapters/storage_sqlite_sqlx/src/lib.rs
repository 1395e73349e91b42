//! # quickbite-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `MenuRepository` port from `quickbite-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run the embedded migration that creates the `menu_items` table
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `quickbite-app` (for port traits) and `quickbite-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod menu_repo;
mod pool;

pub use error::StorageError;
pub use menu_repo::SqliteMenuRepository;
pub use pool::{Config, Database};
