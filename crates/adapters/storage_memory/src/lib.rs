//! # quickbite-adapter-storage-memory
//!
//! In-memory implementation of the `MenuRepository` port.
//!
//! The menu lives in a `Vec` behind a lock and is lost when the process
//! exits. [`InMemoryMenuRepository::builtin`] preloads the menu compiled into
//! the binary, which makes this backend useful for demos and tests that need
//! no files or database.
//!
//! ## Dependency rule
//!
//! Depends on `quickbite-app` (port traits) and `quickbite-domain` only.

mod builtin;
mod repo;

pub use builtin::builtin_menu;
pub use repo::InMemoryMenuRepository;
