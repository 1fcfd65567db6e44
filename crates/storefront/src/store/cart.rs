//! Cart store: the authoritative cart line-item list.

use rust_decimal::Decimal;
use tracing::warn;

use shopease_core::{CartItemDraft, CartLineItem, ProductId};

use crate::store::events::{ChangeBus, StoreEvent};
use crate::store::storage::{CART_ITEMS_KEY, SharedStorage};

/// One consumer's view of the shared cart list.
///
/// Every mutation writes the full list back to storage and then publishes
/// [`StoreEvent::CartUpdated`]. Another `CartStore` over the same storage
/// does not see this instance's memory; it stays consistent by calling
/// [`CartStore::reload`] when the event arrives.
///
/// Storage failures are swallowed: a failed write is logged and the
/// in-memory list kept, so memory and disk can diverge until the next
/// successful write.
pub struct CartStore {
    storage: SharedStorage,
    bus: ChangeBus,
    items: Vec<CartLineItem>,
    loading: bool,
}

impl CartStore {
    /// Create a store that has not read storage yet.
    ///
    /// [`CartStore::is_loading`] stays `true` until the first
    /// [`CartStore::reload`], letting consumers tell "not yet loaded"
    /// apart from "empty".
    #[must_use]
    pub fn new(storage: SharedStorage, bus: ChangeBus) -> Self {
        Self {
            storage,
            bus,
            items: Vec::new(),
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

    /// Re-read the persisted list, replacing the in-memory one.
    ///
    /// Missing or malformed data yields an empty list; the failure is
    /// logged and never surfaced.
    pub fn reload(&mut self) {
        self.items = match self.storage.read(CART_ITEMS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "stored cart is not valid JSON, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read cart from storage, starting empty");
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

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Merge a candidate item into the cart.
    ///
    /// If a line with the same `id` exists its quantity goes up by 1 and
    /// every other field is left untouched; otherwise the draft is
    /// appended with quantity 1. No upper bound is applied here; any
    /// quantity cap is the caller's policy.
    pub fn add_item(&mut self, draft: CartItemDraft) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == draft.id) {
            existing.quantity += 1;
        } else {
            self.items.push(draft.into_line(1));
        }
        self.persist_and_notify();
    }

    /// Set a line's quantity directly.
    ///
    /// A quantity below 1 removes the line instead; quantities of 0 or
    /// less are never stored. Unknown `id` is a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return;
        };
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.persist_and_notify();
    }

    /// Remove the line with the given `id`. No-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() != before {
            self.persist_and_notify();
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_and_notify();
    }

    /// Sum of all line quantities. Recomputed on every read.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines. Recomputed on every read.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Write the full list back and broadcast the change.
    ///
    /// On a failed write the event is not published (nothing observable
    /// changed for other consumers) and the in-memory list is kept as-is.
    fn persist_and_notify(&self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => {
                if let Err(e) = self.storage.write(CART_ITEMS_KEY, &json) {
                    warn!(error = %e, "failed to persist cart");
                    return;
                }
                self.bus.publish(StoreEvent::CartUpdated);
            }
            Err(e) => warn!(error = %e, "failed to serialize cart"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::storage::{FailingStorage, MemoryStorage, StorageBackend};

    fn draft(id: &str, name: &str, cents: i64) -> CartItemDraft {
        CartItemDraft {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Decimal::new(cents, 2),
            image: name.to_lowercase(),
            color: None,
        }
    }

    fn fresh_store() -> (SharedStorage, ChangeBus, CartStore) {
        let storage = MemoryStorage::shared();
        let bus = ChangeBus::new();
        let store = CartStore::load(Arc::clone(&storage), bus.clone());
        (storage, bus, store)
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let (_, _, mut store) = fresh_store();

        for _ in 0..5 {
            store.add_item(draft("1", "Headphones", 9999));
        }

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 5);
    }

    #[test]
    fn test_merge_keeps_original_fields() {
        let (_, _, mut store) = fresh_store();

        let mut first = draft("1", "Headphones", 9999);
        first.color = Some("Black".to_owned());
        store.add_item(first);

        // Second add carries different display fields; the stored line
        // keeps the originals and only the quantity moves.
        let mut second = draft("1", "Renamed", 100);
        second.color = Some("Red".to_owned());
        store.add_item(second);

        let line = &store.items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Headphones");
        assert_eq!(line.price, Decimal::new(9999, 2));
        assert_eq!(line.color.as_deref(), Some("Black"));
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        for q in [0_i64, -1] {
            let (_, _, mut store) = fresh_store();
            store.add_item(draft("1", "Headphones", 9999));

            store.update_quantity(&ProductId::new("1"), q);
            assert!(store.items().is_empty());
            assert_eq!(store.total_items(), 0);
        }
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let (_, _, mut store) = fresh_store();
        store.add_item(draft("1", "Headphones", 9999));

        store.update_quantity(&ProductId::new("1"), 7);
        assert_eq!(store.items()[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let (storage, _, mut store) = fresh_store();
        store.add_item(draft("1", "Headphones", 9999));
        let persisted = storage.read(CART_ITEMS_KEY).unwrap();

        store.update_quantity(&ProductId::new("999"), 3);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 1);
        assert_eq!(storage.read(CART_ITEMS_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_remove_item_absent_is_noop() {
        let (_, bus, mut store) = fresh_store();
        let mut rx = bus.subscribe();

        store.remove_item(&ProductId::new("404"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_totals_track_list() {
        let (_, _, mut store) = fresh_store();
        store.add_item(draft("1", "Headphones", 9999));
        store.add_item(draft("1", "Headphones", 9999));
        store.add_item(draft("2", "Watch", 14999));

        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), Decimal::new(34997, 2));

        let items: Vec<_> = store
            .items()
            .iter()
            .map(|i| (i.id.as_str().to_owned(), i.quantity))
            .collect();
        assert_eq!(items, vec![("1".to_owned(), 2), ("2".to_owned(), 1)]);
    }

    #[test]
    fn test_clear_empties_list_and_storage() {
        let (storage, _, mut store) = fresh_store();
        store.add_item(draft("1", "Headphones", 9999));

        store.clear();

        assert!(store.items().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Decimal::ZERO);
        assert_eq!(storage.read(CART_ITEMS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_round_trip_into_fresh_store() {
        let (storage, bus, mut store) = fresh_store();
        store.add_item(draft("1", "Headphones", 9999));
        store.add_item(draft("3", "Watch", 14999));
        store.update_quantity(&ProductId::new("3"), 2);

        let reloaded = CartStore::load(Arc::clone(&storage), bus);
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let storage = MemoryStorage::shared();
        storage.write(CART_ITEMS_KEY, "{not json").unwrap();

        let store = CartStore::load(Arc::clone(&storage), ChangeBus::new());
        assert!(store.items().is_empty());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_loading_flag_clears_after_first_read() {
        let store = CartStore::new(MemoryStorage::shared(), ChangeBus::new());
        assert!(store.is_loading());

        let store = CartStore::load(MemoryStorage::shared(), ChangeBus::new());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_mutation_publishes_event() {
        let (_, bus, mut store) = fresh_store();
        let mut rx = bus.subscribe();

        store.add_item(draft("1", "Headphones", 9999));
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::CartUpdated);
    }

    #[test]
    fn test_consumers_converge_via_reload() {
        let storage = MemoryStorage::shared();
        let bus = ChangeBus::new();
        let mut writer = CartStore::load(Arc::clone(&storage), bus.clone());
        let mut badge = CartStore::load(Arc::clone(&storage), bus.clone());

        writer.add_item(draft("1", "Headphones", 9999));

        // The second consumer does not share memory with the first...
        assert_eq!(badge.total_items(), 0);
        // ...until it reacts to the notification by re-reading storage.
        badge.reload();
        assert_eq!(badge.total_items(), 1);
    }

    #[test]
    fn test_write_failure_keeps_memory_and_suppresses_event() {
        let bus = ChangeBus::new();
        let mut store = CartStore::load(Arc::new(FailingStorage), bus.clone());
        let mut rx = bus.subscribe();

        store.add_item(draft("1", "Headphones", 9999));

        // In-memory state moved on even though persistence failed.
        assert_eq!(store.total_items(), 1);
        assert!(rx.try_recv().is_err());
    }
}
