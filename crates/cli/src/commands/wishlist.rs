//! Inspect or clear the persisted wishlist.

use std::sync::Arc;

use tracing::info;

use shopease_storefront::store::{ChangeBus, FileStorage, SharedStorage, WishlistStore};

fn open(dir: &str) -> Result<WishlistStore, Box<dyn std::error::Error>> {
    let storage: SharedStorage = Arc::new(FileStorage::open(dir)?);
    Ok(WishlistStore::load(storage, ChangeBus::new()))
}

/// Print the current wishlist entries.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn show(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let wishlist = open(dir)?;

    if wishlist.entries().is_empty() {
        info!("Wishlist is empty");
        return Ok(());
    }

    for entry in wishlist.entries() {
        info!(
            id = %entry.id,
            price = %entry.price,
            category = %entry.category,
            "{}",
            entry.name
        );
    }
    info!(count = wishlist.count(), "Total saved");
    Ok(())
}

/// Empty the persisted wishlist.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn clear(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut wishlist = open(dir)?;
    wishlist.clear();
    info!("Wishlist cleared");
    Ok(())
}
