//! Wishlist route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopease_core::{CartItemDraft, ProductId, WishlistEntry};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::{CartStore, WishlistStore};

/// Wishlist contents.
#[derive(Debug, Serialize)]
pub struct WishlistView {
    pub entries: Vec<WishlistEntry>,
    pub count: usize,
    pub is_loading: bool,
}

impl WishlistView {
    fn from_store(store: &WishlistStore) -> Self {
        Self {
            entries: store.entries().to_vec(),
            count: store.count(),
            is_loading: store.is_loading(),
        }
    }
}

/// Wishlist badge payload.
#[derive(Debug, Serialize)]
pub struct WishlistCountView {
    pub count: usize,
}

/// Toggle request body.
#[derive(Debug, Deserialize)]
pub struct ToggleWishlistRequest {
    pub product_id: ProductId,
}

/// Result of a toggle: whether the product is saved afterwards.
#[derive(Debug, Serialize)]
pub struct ToggleWishlistView {
    pub in_wishlist: bool,
    pub count: usize,
}

/// Remove request body.
#[derive(Debug, Deserialize)]
pub struct RemoveWishlistRequest {
    pub id: ProductId,
}

/// Move-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct MoveToCartRequest {
    pub id: ProductId,
}

/// Counts after a move-to-cart.
#[derive(Debug, Serialize)]
pub struct MoveToCartView {
    pub cart_count: u64,
    pub wishlist_count: usize,
}

/// Current wishlist contents.
pub async fn show(State(state): State<AppState>) -> Json<WishlistView> {
    let wishlist = WishlistStore::load(state.storage(), state.bus());
    Json(WishlistView::from_store(&wishlist))
}

/// Save a product, or un-save it if already present.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleWishlistRequest>,
) -> Result<Json<ToggleWishlistView>> {
    let product = state
        .catalog()
        .get(&req.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", req.product_id)))?;

    let mut wishlist = WishlistStore::load(state.storage(), state.bus());
    let in_wishlist = wishlist.toggle(WishlistEntry {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price.amount,
        image: product.image.clone(),
        category: product.category.clone(),
    });

    Ok(Json(ToggleWishlistView {
        in_wishlist,
        count: wishlist.count(),
    }))
}

/// Remove a saved product.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveWishlistRequest>,
) -> Json<WishlistView> {
    let mut wishlist = WishlistStore::load(state.storage(), state.bus());
    wishlist.remove(&req.id);
    Json(WishlistView::from_store(&wishlist))
}

/// Move a saved product into the cart and drop it from the wishlist.
#[instrument(skip(state))]
pub async fn move_to_cart(
    State(state): State<AppState>,
    Json(req): Json<MoveToCartRequest>,
) -> Result<Json<MoveToCartView>> {
    let mut wishlist = WishlistStore::load(state.storage(), state.bus());
    let entry = wishlist
        .entries()
        .iter()
        .find(|entry| entry.id == req.id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("wishlist entry {}", req.id)))?;

    let mut cart = CartStore::load(state.storage(), state.bus());
    cart.add_item(CartItemDraft {
        id: entry.id.clone(),
        name: entry.name,
        price: entry.price,
        image: entry.image,
        color: None,
    });
    wishlist.remove(&entry.id);

    Ok(Json(MoveToCartView {
        cart_count: cart.total_items(),
        wishlist_count: wishlist.count(),
    }))
}

/// Wishlist count badge.
pub async fn count(State(state): State<AppState>) -> Json<WishlistCountView> {
    let wishlist = WishlistStore::load(state.storage(), state.bus());
    Json(WishlistCountView {
        count: wishlist.count(),
    })
}
