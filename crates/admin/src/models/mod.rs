//! Domain models for the admin panel.
//!
//! These are the rows behind the admin tables. They live in process
//! memory, seeded from sample data; the demo has no database, and a
//! restart reseeds everything.

pub mod session;

pub use session::{CurrentAdmin, keys as session_keys};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopease_core::{
    AccountStatus, Email, OrderId, OrderStatus, PaymentStatus, ProductId, StockStatus,
    TravellerId, TravellerStatus, UserId, UserRole,
};

/// A managed catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
}

impl AdminProduct {
    /// Inventory status derived from the stock count on every read.
    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }
}

/// A managed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: OrderId,
    pub customer: String,
    pub placed_on: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub item_count: u32,
    /// Optional note attached to the last status change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
}

/// A managed user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub status: AccountStatus,
    pub joined_on: NaiveDate,
    pub avatar: String,
}

/// A traveller application under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traveller {
    pub id: TravellerId,
    pub name: String,
    pub email: Email,
    pub destination: String,
    pub travel_date: NaiveDate,
    pub status: TravellerStatus,
    pub submitted_on: NaiveDate,
    pub avatar: String,
    /// Reason recorded when the application is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_follows_stock() {
        let mut product = AdminProduct {
            id: ProductId::new("3"),
            name: "Smart Watch".to_owned(),
            category: "Electronics".to_owned(),
            price: Decimal::new(19999, 2),
            stock: 0,
        };
        assert_eq!(product.status(), StockStatus::OutOfStock);

        product.stock = 8;
        assert_eq!(product.status(), StockStatus::LowStock);

        product.stock = 45;
        assert_eq!(product.status(), StockStatus::InStock);
    }
}
