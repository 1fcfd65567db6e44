//! Cart and wishlist item types.
//!
//! These are the denormalized records persisted by the shared
//! cart/wishlist store: a product reference plus whatever display fields
//! the surfaces need, copied at add time and never re-fetched from the
//! catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A single cart row: one per distinct product.
///
/// Invariants maintained by the cart store:
/// - at most one line per `id` (adding again merges quantities)
/// - `quantity >= 1` (a line dropped below 1 is removed, never stored at 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price at time of add; not re-validated against the catalog.
    pub price: Decimal,
    /// Opaque image reference/query key.
    pub image: String,
    pub quantity: u32,
    /// Variant selector, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartLineItem {
    /// The line's extended price (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A candidate cart item, lacking a quantity.
///
/// The cart store decides the quantity: 1 for a new line, or an increment
/// of the existing line's quantity on a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemDraft {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartItemDraft {
    /// Promote the draft to a stored line with the given quantity.
    #[must_use]
    pub fn into_line(self, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity,
            color: self.color,
        }
    }
}

/// A saved product reference without quantity.
///
/// Invariant maintained by the wishlist store: at most one entry per `id`
/// (presence/absence only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
}
