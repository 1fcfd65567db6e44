//! ShopEase Core - Shared types library.
//!
//! This crate provides common types used across all ShopEase components:
//! - `storefront` - Public-facing demo shop
//! - `admin` - Internal administration panel
//! - `cli` - Command-line tools for seeding and inspecting demo state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! handlers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   statuses, plus the cart and wishlist item types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
