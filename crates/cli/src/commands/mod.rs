//! CLI command implementations.

pub mod cart;
pub mod seed;
pub mod wishlist;
