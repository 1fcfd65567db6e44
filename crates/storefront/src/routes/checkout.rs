//! Checkout route handlers.
//!
//! Checkout is a simulation: totals are computed from the live cart, the
//! order goes to the backend stub, and the cart is cleared on success.
//! Nothing is fulfilled.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopease_core::{AddressId, CartLineItem, OrderId};

use crate::backend::OrderSubmission;
use crate::catalog::orders::{SavedAddress, saved_addresses};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::CartStore;

/// Per-line quantity cap, applied only here.
///
/// The cart store itself never clamps; the cap is checkout policy, and
/// this is the one call site that owns it.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// Orders above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Flat shipping fee below the free threshold.
const FLAT_SHIPPING: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Sales tax rate (8%).
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Order cost breakdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Compute shipping, tax, and total from a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = (subtotal * TAX_RATE).round_dp(2);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Checkout page payload.
#[derive(Debug, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<CartLineItem>,
    pub saved_addresses: Vec<SavedAddress>,
    #[serde(flatten)]
    pub totals: Totals,
}

/// A new shipping address entered at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
}

/// Order submission request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// One of the saved addresses...
    pub address_id: Option<AddressId>,
    /// ...or a newly entered one. Omitting both picks the default saved
    /// address.
    pub address: Option<NewAddress>,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    pub notes: Option<String>,
}

fn default_payment_method() -> String {
    "stripe".to_owned()
}

/// Order confirmation payload.
#[derive(Debug, Serialize)]
pub struct ConfirmationView {
    pub order_id: OrderId,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery_days: u8,
    pub message: String,
}

/// Checkout summary: live cart contents plus the cost breakdown.
pub async fn summary(State(state): State<AppState>) -> Json<CheckoutSummary> {
    let cart = CartStore::load(state.storage(), state.bus());
    Json(CheckoutSummary {
        items: cart.items().to_vec(),
        saved_addresses: saved_addresses(),
        totals: Totals::from_subtotal(cart.total_price()),
    })
}

/// Submit the order.
#[instrument(skip(state, req))]
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<impl IntoResponse> {
    let mut cart = CartStore::load(state.storage(), state.bus());
    if cart.items().is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_owned()));
    }

    // Enforce the per-line cap before pricing the order.
    let over_cap: Vec<_> = cart
        .items()
        .iter()
        .filter(|item| item.quantity > MAX_LINE_QUANTITY)
        .map(|item| item.id.clone())
        .collect();
    for id in over_cap {
        cart.update_quantity(&id, i64::from(MAX_LINE_QUANTITY));
    }

    let shipping_address = resolve_address(req.address_id, req.address)?;
    let totals = Totals::from_subtotal(cart.total_price());

    let confirmation = state
        .backend()
        .submit_order(OrderSubmission {
            items: cart.items().to_vec(),
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            tax: totals.tax,
            total: totals.total,
            shipping_address,
            payment_method: req.payment_method,
            notes: req.notes,
        })
        .await?;

    cart.clear();

    Ok((
        StatusCode::CREATED,
        Json(ConfirmationView {
            message: format!("Order {} confirmed", confirmation.order_id),
            order_id: confirmation.order_id,
            total: confirmation.total,
            placed_at: confirmation.placed_at,
            estimated_delivery_days: confirmation.estimated_delivery_days,
        }),
    ))
}

/// Pick the shipping address: explicit id, new address, or the default.
fn resolve_address(
    address_id: Option<AddressId>,
    new_address: Option<NewAddress>,
) -> Result<String> {
    if let Some(id) = address_id {
        return saved_addresses()
            .iter()
            .find(|a| a.id == id)
            .map(SavedAddress::display)
            .ok_or_else(|| AppError::NotFound(format!("address {id}")));
    }
    if let Some(addr) = new_address {
        return Ok(format!(
            "{}, {}, {} {}, {}",
            addr.address, addr.city, addr.state, addr.zip, addr.country
        ));
    }
    saved_addresses()
        .iter()
        .find(|a| a.is_default)
        .map(SavedAddress::display)
        .ok_or_else(|| AppError::Internal("no default address seeded".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shipping_at_or_below_threshold() {
        let totals = Totals::from_subtotal(Decimal::new(10000, 2)); // $100.00
        assert_eq!(totals.shipping, Decimal::new(10, 0));

        let totals = Totals::from_subtotal(Decimal::new(9999, 2));
        assert_eq!(totals.shipping, Decimal::new(10, 0));
    }

    #[test]
    fn test_free_shipping_above_threshold() {
        let totals = Totals::from_subtotal(Decimal::new(10001, 2)); // $100.01
        assert_eq!(totals.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_eight_percent_rounded() {
        let totals = Totals::from_subtotal(Decimal::new(9999, 2)); // $99.99
        assert_eq!(totals.tax, Decimal::new(800, 2)); // 7.9992 -> 8.00
        assert_eq!(totals.total, Decimal::new(11799, 2)); // 99.99 + 10 + 8
    }

    #[test]
    fn test_resolve_address_prefers_explicit_id() {
        let resolved = resolve_address(Some(AddressId::new("2")), None).expect("seeded");
        assert!(resolved.starts_with("456 Oak Ave"));
    }

    #[test]
    fn test_resolve_address_unknown_id_fails() {
        assert!(resolve_address(Some(AddressId::new("99")), None).is_err());
    }

    #[test]
    fn test_resolve_address_defaults() {
        let resolved = resolve_address(None, None).expect("default exists");
        assert!(resolved.starts_with("123 Main St"));
    }
}
