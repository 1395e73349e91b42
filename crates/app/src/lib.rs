//! # quickbite-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `MenuRepository` — list, get, create, update, delete menu items
//! - Define **driving/inbound** use-cases:
//!   - `MenuService` — list, get, specials, create, patch, delete
//!   - `seed_menu` — one-shot batch import into a repository
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `quickbite-domain` only (plus `rand` for specials).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
