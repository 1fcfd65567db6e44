//! Shared cart/wishlist store.
//!
//! The storefront's UI surfaces (navbar badges, cart page, product cards,
//! wishlist page) are independent consumers with no shared in-memory
//! state. Each one loads its own store instance from the key-value
//! storage, mutates it, and finds out about everyone else's mutations
//! through a payload-less broadcast: on a change notification a consumer
//! re-reads storage rather than trusting anything carried by the event.
//!
//! This is pub/sub over storage, not a shared mutable singleton. Writes
//! are read-modify-write with no lock; concurrent writers are
//! last-write-wins at the storage layer.

pub mod cart;
pub mod events;
pub mod storage;
pub mod wishlist;

pub use cart::CartStore;
pub use events::{ChangeBus, StoreEvent};
pub use storage::{
    CART_ITEMS_KEY, FileStorage, LOGGED_IN_KEY, MemoryStorage, SharedStorage, StorageBackend,
    StorageError, WISHLIST_ITEMS_KEY,
};
pub use wishlist::WishlistStore;
