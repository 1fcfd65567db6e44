//! Inspect or clear the persisted cart.

use std::sync::Arc;

use tracing::info;

use shopease_storefront::store::{CartStore, ChangeBus, FileStorage, SharedStorage};

fn open(dir: &str) -> Result<CartStore, Box<dyn std::error::Error>> {
    let storage: SharedStorage = Arc::new(FileStorage::open(dir)?);
    Ok(CartStore::load(storage, ChangeBus::new()))
}

/// Print the current cart lines and totals.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn show(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cart = open(dir)?;

    if cart.items().is_empty() {
        info!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        info!(
            id = %item.id,
            quantity = item.quantity,
            price = %item.price,
            "{}",
            item.name
        );
    }
    info!(
        total_items = cart.total_items(),
        total_price = %cart.total_price(),
        "Totals"
    );
    Ok(())
}

/// Empty the persisted cart.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn clear(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open(dir)?;
    cart.clear();
    info!("Cart cleared");
    Ok(())
}
