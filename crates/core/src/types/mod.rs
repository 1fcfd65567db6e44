//! Core types for ShopEase.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod items;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use items::{CartItemDraft, CartLineItem, WishlistEntry};
pub use price::{CurrencyCode, Price};
pub use status::*;
