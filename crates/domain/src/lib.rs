//! # quickbite-domain
//!
//! Pure domain model for the quickbite menu service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **menu items** and the payloads used to create and patch them
//! - Coerce loosely typed prices (`9.5` or `"9.5"`) into numbers
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod price;

pub mod menu_item;
