//! Seed the data directory with sample cart/wishlist state, so a fresh
//! storefront run has something to show.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use shopease_core::{CartItemDraft, ProductId, WishlistEntry};
use shopease_storefront::store::{
    CartStore, ChangeBus, FileStorage, SharedStorage, WishlistStore,
};

fn draft(id: &str, name: &str, cents: i64, image: &str, color: &str) -> CartItemDraft {
    CartItemDraft {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        image: image.to_owned(),
        color: Some(color.to_owned()),
    }
}

fn entry(id: &str, name: &str, cents: i64, image: &str, category: &str) -> WishlistEntry {
    WishlistEntry {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        image: image.to_owned(),
        category: category.to_owned(),
    }
}

/// Write the sample cart and wishlist into the data directory.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn run(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage: SharedStorage = Arc::new(FileStorage::open(dir)?);
    let bus = ChangeBus::new();

    let mut cart = CartStore::load(Arc::clone(&storage), bus.clone());
    cart.clear();
    cart.add_item(draft("1", "Wireless Headphones", 9999, "headphones", "Black"));
    cart.add_item(draft("3", "Smart Watch", 14999, "watch", "Silver"));
    cart.add_item(draft("3", "Smart Watch", 14999, "watch", "Silver"));
    info!(
        items = cart.total_items(),
        total = %cart.total_price(),
        "Seeded cart"
    );

    let mut wishlist = WishlistStore::load(storage, bus);
    wishlist.clear();
    wishlist.add(entry("2", "Cotton T-Shirt", 2499, "tshirt", "Clothing"));
    wishlist.add(entry("4", "Running Shoes", 7999, "shoes", "Sports"));
    wishlist.add(entry("5", "Bluetooth Speaker", 5999, "speaker", "Electronics"));
    wishlist.add(entry("8", "Yoga Mat", 3999, "yoga", "Sports"));
    wishlist.add(entry("10", "Backpack", 6999, "backpack", "Accessories"));
    info!(entries = wishlist.count(), "Seeded wishlist");

    Ok(())
}
