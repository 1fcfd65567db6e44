//! Simulated commerce backend.
//!
//! Every "network call" in the demo is a fixed-latency delay that then
//! succeeds; there is no transport, no retry, no cancellation. The
//! handlers depend on [`CommerceBackend`] rather than on the timer so
//! tests can inject an instant or failing implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use shopease_core::{CartLineItem, Email, OrderId, TravellerId};

/// Simulated latency for login/registration/password-reset calls.
pub const AUTH_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency for order submission.
pub const CHECKOUT_DELAY: Duration = Duration::from_millis(2000);

/// Simulated latency for traveller applications.
pub const TRAVELLER_DELAY: Duration = Duration::from_millis(2000);

/// Errors a backend implementation can surface.
///
/// The simulated backend never fails; the variants exist so the handlers
/// and tests can exercise the unhappy paths against other
/// implementations.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// An order handed to the backend at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub items: Vec<CartLineItem>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub shipping_address: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// What the backend returns for an accepted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery_days: u8,
}

/// A traveller application, as submitted by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravellerApplication {
    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,

    // Travel information
    pub vehicle_type: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    pub license_plate: String,
    pub route_from: String,
    pub route_to: String,
    pub available_days: Vec<String>,

    // Document references (opaque upload keys)
    pub driving_license: String,
    pub vehicle_registration: String,
    pub insurance: String,
}

/// Receipt for a submitted traveller application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravellerTicket {
    pub application_id: TravellerId,
    pub submitted_at: DateTime<Utc>,
}

/// The backend the storefront talks to: one async method per action.
#[async_trait]
pub trait CommerceBackend: Send + Sync {
    /// Check credentials and establish a customer session.
    async fn authenticate(&self, email: &Email, password: &str) -> Result<(), BackendError>;

    /// Create a customer account.
    async fn register_account(&self, email: &Email, password: &str) -> Result<(), BackendError>;

    /// Send a password-reset link.
    async fn request_password_reset(&self, email: &Email) -> Result<(), BackendError>;

    /// Submit an order for fulfillment.
    async fn submit_order(
        &self,
        order: OrderSubmission,
    ) -> Result<OrderConfirmation, BackendError>;

    /// Submit a traveller application for review.
    async fn register_traveller(
        &self,
        application: TravellerApplication,
    ) -> Result<TravellerTicket, BackendError>;
}

/// The stand-in backend: sleeps for the configured latency, then
/// succeeds. Exists purely to drive loading-state UI.
pub struct SimulatedBackend {
    latency_override: Option<Duration>,
}

impl SimulatedBackend {
    /// Backend with the per-action default latencies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency_override: None,
        }
    }

    /// Backend with one latency for every action (tests pass
    /// `Duration::ZERO`).
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

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommerceBackend for SimulatedBackend {
    #[instrument(skip(self, _password), fields(email = %email))]
    async fn authenticate(&self, email: &Email, _password: &str) -> Result<(), BackendError> {
        self.pause(AUTH_DELAY).await;
        info!("simulated login accepted");
        Ok(())
    }

    #[instrument(skip(self, _password), fields(email = %email))]
    async fn register_account(&self, email: &Email, _password: &str) -> Result<(), BackendError> {
        self.pause(AUTH_DELAY).await;
        info!("simulated registration accepted");
        Ok(())
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn request_password_reset(&self, email: &Email) -> Result<(), BackendError> {
        self.pause(AUTH_DELAY).await;
        info!("simulated reset link sent");
        Ok(())
    }

    #[instrument(skip(self, order), fields(total = %order.total))]
    async fn submit_order(
        &self,
        order: OrderSubmission,
    ) -> Result<OrderConfirmation, BackendError> {
        self.pause(CHECKOUT_DELAY).await;
        let order_id = OrderId::new(format!("ORD-{}", rand::rng().random_range(1000..10000)));
        info!(%order_id, "simulated order accepted");
        Ok(OrderConfirmation {
            order_id,
            total: order.total,
            placed_at: Utc::now(),
            estimated_delivery_days: 5,
        })
    }

    #[instrument(skip(self, application), fields(email = %application.email))]
    async fn register_traveller(
        &self,
        application: TravellerApplication,
    ) -> Result<TravellerTicket, BackendError> {
        self.pause(TRAVELLER_DELAY).await;
        let application_id =
            TravellerId::new(format!("TRV-{}", rand::rng().random_range(1000..10000)));
        info!(%application_id, "simulated traveller application received");
        Ok(TravellerTicket {
            application_id,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_order() -> OrderSubmission {
        OrderSubmission {
            items: Vec::new(),
            subtotal: Decimal::new(24997, 2),
            shipping: Decimal::ZERO,
            tax: Decimal::new(2000, 2),
            total: Decimal::new(26997, 2),
            shipping_address: "123 Main St, Anytown, USA".to_owned(),
            payment_method: "stripe".to_owned(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_instant_backend_resolves_without_delay() {
        let backend = SimulatedBackend::instant();
        let email = Email::parse("user@example.com").unwrap();

        tokio::time::timeout(Duration::from_millis(50), backend.authenticate(&email, "pw"))
            .await
            .expect("instant backend should not sleep")
            .unwrap();
    }

    #[tokio::test]
    async fn test_submit_order_echoes_total_and_ids_order() {
        let backend = SimulatedBackend::instant();
        let confirmation = backend.submit_order(sample_order()).await.unwrap();

        assert_eq!(confirmation.total, Decimal::new(26997, 2));
        assert!(confirmation.order_id.as_str().starts_with("ORD-"));
    }

    #[tokio::test]
    async fn test_default_latency_is_applied() {
        let backend = SimulatedBackend::with_latency(Duration::from_millis(80));
        let email = Email::parse("user@example.com").unwrap();

        let started = std::time::Instant::now();
        backend.request_password_reset(&email).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(80));
    }
}
