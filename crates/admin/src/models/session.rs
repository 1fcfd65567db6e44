//! Session-related types for the admin panel.

use serde::{Deserialize, Serialize};

use shopease_core::Email;

/// Session-stored admin identity.
///
/// Set by the simulated login; there is no real credential store behind
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's email address.
    pub email: Email,
    /// Display name derived from the email's local part.
    pub name: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
