//! Session-related types.
//!
//! Types stored in the session for the demo authentication state.

use serde::{Deserialize, Serialize};

use shopease_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
/// The "authentication" behind it is a latency stub; there is no
/// credential check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
