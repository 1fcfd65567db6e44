//! Wishlist store: saved product references, presence/absence only.

use tracing::warn;

use shopease_core::{ProductId, WishlistEntry};

use crate::store::events::{ChangeBus, StoreEvent};
use crate::store::storage::{SharedStorage, WISHLIST_ITEMS_KEY};

/// One consumer's view of the shared wishlist.
///
/// Same persist-then-notify contract as the cart store, without
/// quantities: an entry is either saved or it isn't.
pub struct WishlistStore {
    storage: SharedStorage,
    bus: ChangeBus,
    entries: Vec<WishlistEntry>,
    loading: bool,
}

impl WishlistStore {
    /// Create a store that has not read storage yet.
    #[must_use]
    pub fn new(storage: SharedStorage, bus: ChangeBus) -> Self {
        Self {
            storage,
            bus,
            entries: Vec::new(),
            loading: true,
        }
    }

    /// Create a store and immediately load the persisted list.
    #[must_use]
    pub fn load(storage: SharedStorage, bus: ChangeBus) -> Self {
        let mut store = Self::new(storage, bus);
        store.reload();
        store
    }

    /// Re-read the persisted list. Missing or malformed data yields an
    /// empty list; the failure is logged, never surfaced.
    pub fn reload(&mut self) {
        self.entries = match self.storage.read(WISHLIST_ITEMS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "stored wishlist is not valid JSON, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read wishlist from storage, starting empty");
                Vec::new()
            }
        };
        self.loading = false;
    }

    /// Whether the store has not yet read storage.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Whether an entry with this `id` is saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    /// Number of saved entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Save an entry. Adding an already-saved `id` is a no-op; at most
    /// one entry per product.
    pub fn add(&mut self, entry: WishlistEntry) {
        if self.contains(&entry.id) {
            return;
        }
        self.entries.push(entry);
        self.persist_and_notify();
    }

    /// Remove the entry with the given `id`. No-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        if self.entries.len() != before {
            self.persist_and_notify();
        }
    }

    /// Add if absent, remove if present. Returns `true` when the entry is
    /// saved after the call.
    pub fn toggle(&mut self, entry: WishlistEntry) -> bool {
        if self.contains(&entry.id) {
            self.remove(&entry.id);
            false
        } else {
            self.add(entry);
            true
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist_and_notify();
    }

    fn persist_and_notify(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = self.storage.write(WISHLIST_ITEMS_KEY, &json) {
                    warn!(error = %e, "failed to persist wishlist");
                    return;
                }
                self.bus.publish(StoreEvent::WishlistUpdated);
            }
            Err(e) => warn!(error = %e, "failed to serialize wishlist"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::store::storage::{MemoryStorage, StorageBackend};

    fn entry(id: &str, name: &str) -> WishlistEntry {
        WishlistEntry {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Decimal::new(2499, 2),
            image: name.to_lowercase(),
            category: "Clothing".to_owned(),
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let mut store = WishlistStore::load(MemoryStorage::shared(), ChangeBus::new());
        store.add(entry("2", "Cotton T-Shirt"));
        store.add(entry("2", "Cotton T-Shirt"));

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_toggle_flips_presence() {
        let mut store = WishlistStore::load(MemoryStorage::shared(), ChangeBus::new());

        assert!(store.toggle(entry("4", "Running Shoes")));
        assert!(store.contains(&ProductId::new("4")));

        assert!(!store.toggle(entry("4", "Running Shoes")));
        assert!(!store.contains(&ProductId::new("4")));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let storage = MemoryStorage::shared();
        let bus = ChangeBus::new();
        let mut store = WishlistStore::load(Arc::clone(&storage), bus.clone());
        store.add(entry("2", "Cotton T-Shirt"));
        store.add(entry("8", "Yoga Mat"));
        store.add(entry("5", "Bluetooth Speaker"));

        let reloaded = WishlistStore::load(storage, bus);
        let ids: Vec<_> = reloaded.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "8", "5"]);
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let storage = MemoryStorage::shared();
        storage.write(WISHLIST_ITEMS_KEY, "not an array").unwrap();

        let store = WishlistStore::load(storage, ChangeBus::new());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_mutations_publish_wishlist_event() {
        let bus = ChangeBus::new();
        let mut store = WishlistStore::load(MemoryStorage::shared(), bus.clone());
        let mut rx = bus.subscribe();

        store.add(entry("10", "Backpack"));
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::WishlistUpdated);

        store.remove(&ProductId::new("10"));
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::WishlistUpdated);
    }
}
