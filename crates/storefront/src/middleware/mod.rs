//! Middleware configuration for the storefront.

pub mod session;

pub use session::create_session_layer;
