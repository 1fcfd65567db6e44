//! Simulated admin backend.
//!
//! Every admin dialog in the demo "calls an API" that is a fixed delay.
//! The one call with real logic is login: the simulated JWT check
//! accepts any email containing `admin`. Handlers depend on the
//! [`AdminBackend`] trait so tests can skip the delays or force
//! failures.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

use shopease_core::{Email, OrderId, OrderStatus, ProductId, TravellerId, UserId};

use crate::models::CurrentAdmin;

/// Simulated latency for the login check.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency for form dialogs (product/user edits).
pub const FORM_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency for quick confirmation dialogs.
pub const DIALOG_DELAY: Duration = Duration::from_millis(1000);

/// Errors an admin backend can surface.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid admin credentials")]
    InvalidCredentials,

    #[error("operation rejected: {0}")]
    Rejected(String),
}

/// The backend behind the admin dialogs: one async method per action.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// Check admin credentials.
    async fn authenticate(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<CurrentAdmin, BackendError>;

    /// Persist a product create/update.
    async fn save_product(&self, id: &ProductId) -> Result<(), BackendError>;

    /// Delete a product.
    async fn delete_product(&self, id: &ProductId) -> Result<(), BackendError>;

    /// Record an order status change.
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), BackendError>;

    /// Persist a user edit.
    async fn save_user(&self, id: &UserId) -> Result<(), BackendError>;

    /// Delete a user.
    async fn delete_user(&self, id: &UserId) -> Result<(), BackendError>;

    /// Record a traveller review decision.
    async fn review_traveller(
        &self,
        id: &TravellerId,
        approved: bool,
    ) -> Result<(), BackendError>;
}

/// The stand-in backend: sleeps, then succeeds (login excepted).
pub struct SimulatedAdminBackend {
    latency_override: Option<Duration>,
}

impl SimulatedAdminBackend {
    /// Backend with the per-action default latencies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency_override: None,
        }
    }

    /// Backend with one latency for every action.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self {
            latency_override: Some(latency),
        }
    }

    /// Backend that resolves immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    async fn pause(&self, default: Duration) {
        tokio::time::sleep(self.latency_override.unwrap_or(default)).await;
    }
}

impl Default for SimulatedAdminBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case an email local part into a display name
/// (`admin.user` -> `Admin User`).
fn display_name(email: &Email) -> String {
    email
        .local_part()
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl AdminBackend for SimulatedAdminBackend {
    #[instrument(skip(self, _password), fields(email = %email))]
    async fn authenticate(
        &self,
        email: &Email,
        _password: &str,
    ) -> Result<CurrentAdmin, BackendError> {
        self.pause(LOGIN_DELAY).await;

        // The demo's "JWT check": any email containing "admin" passes.
        if !email.as_str().contains("admin") {
            return Err(BackendError::InvalidCredentials);
        }

        info!("simulated admin login accepted");
        Ok(CurrentAdmin {
            name: display_name(email),
            email: email.clone(),
        })
    }

    async fn save_product(&self, id: &ProductId) -> Result<(), BackendError> {
        self.pause(FORM_DELAY).await;
        info!(product = %id, "simulated product save");
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), BackendError> {
        self.pause(DIALOG_DELAY).await;
        info!(product = %id, "simulated product delete");
        Ok(())
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), BackendError> {
        self.pause(DIALOG_DELAY).await;
        info!(order = %id, %status, "simulated order status update");
        Ok(())
    }

    async fn save_user(&self, id: &UserId) -> Result<(), BackendError> {
        self.pause(FORM_DELAY).await;
        info!(user = %id, "simulated user save");
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), BackendError> {
        self.pause(DIALOG_DELAY).await;
        info!(user = %id, "simulated user delete");
        Ok(())
    }

    async fn review_traveller(
        &self,
        id: &TravellerId,
        approved: bool,
    ) -> Result<(), BackendError> {
        self.pause(FORM_DELAY).await;
        info!(traveller = %id, approved, "simulated traveller review");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_email_passes() {
        let backend = SimulatedAdminBackend::instant();
        let email = Email::parse("admin@shopease.example").unwrap();
        let admin = backend.authenticate(&email, "anything").await.unwrap();
        assert_eq!(admin.name, "Admin");
    }

    #[tokio::test]
    async fn test_non_admin_email_is_rejected() {
        let backend = SimulatedAdminBackend::instant();
        let email = Email::parse("customer@shopease.example").unwrap();
        assert!(matches!(
            backend.authenticate(&email, "anything").await,
            Err(BackendError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_display_name_title_cases_local_part() {
        let email = Email::parse("admin.user@shopease.example").unwrap();
        assert_eq!(display_name(&email), "Admin User");
    }
}
