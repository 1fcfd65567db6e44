//! Cart route handlers.
//!
//! Each handler loads a fresh [`CartStore`] over the shared storage.
//! Handlers are independent consumers exactly like the UI surfaces they
//! serve, and converge through storage plus the change bus rather than a
//! shared in-memory cart.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopease_core::{CartItemDraft, CartLineItem, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::CartStore;

/// Cart contents plus derived totals.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub total_items: u64,
    pub total_price: Decimal,
    pub is_loading: bool,
}

impl CartView {
    fn from_store(store: &CartStore) -> Self {
        Self {
            items: store.items().to_vec(),
            total_items: store.total_items(),
            total_price: store.total_price(),
            is_loading: store.is_loading(),
        }
    }
}

/// Cart badge payload.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u64,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub color: Option<String>,
}

/// Update quantity request body. Quantities below 1 remove the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub id: ProductId,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub id: ProductId,
}

/// Current cart contents.
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let cart = CartStore::load(state.storage(), state.bus());
    Json(CartView::from_store(&cart))
}

/// Add a product to the cart (merge-on-add).
///
/// The line is denormalized from the catalog at add time; later catalog
/// changes do not touch existing lines.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<impl IntoResponse> {
    let product = state
        .catalog()
        .get(&req.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", req.product_id)))?;

    let mut cart = CartStore::load(state.storage(), state.bus());
    cart.add_item(CartItemDraft {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price.amount,
        image: product.image.clone(),
        color: req.color,
    });

    Ok((
        StatusCode::OK,
        Json(CartCountView {
            count: cart.total_items(),
        }),
    ))
}

/// Set a line's quantity (values below 1 remove it).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateCartRequest>,
) -> Json<CartView> {
    let mut cart = CartStore::load(state.storage(), state.bus());
    cart.update_quantity(&req.id, req.quantity);
    Json(CartView::from_store(&cart))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    let mut cart = CartStore::load(state.storage(), state.bus());
    cart.remove_item(&req.id);
    Json(CartView::from_store(&cart))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut cart = CartStore::load(state.storage(), state.bus());
    cart.clear();
    Json(CartView::from_store(&cart))
}

/// Cart count badge.
pub async fn count(State(state): State<AppState>) -> Json<CartCountView> {
    let cart = CartStore::load(state.storage(), state.bus());
    Json(CartCountView {
        count: cart.total_items(),
    })
}
