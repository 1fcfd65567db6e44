//! Seed datasets for the admin tables.
//!
//! Hard-coded sample rows, loaded into the in-memory tables at startup.

pub mod reports;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shopease_core::{
    AccountStatus, Email, OrderId, OrderStatus, PaymentStatus, ProductId, TravellerId,
    TravellerStatus, UserId, UserRole,
};

use crate::models::{AdminOrder, AdminProduct, AdminUser, Traveller};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn email(s: &str) -> Email {
    Email::parse(s).unwrap_or_else(|_| Email::parse("invalid@example.com").expect("literal"))
}

/// Sample managed products.
#[must_use]
pub fn seed_products() -> Vec<AdminProduct> {
    let row = |id: &str, name: &str, category: &str, cents: i64, stock: u32| AdminProduct {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Decimal::new(cents, 2),
        stock,
    };

    vec![
        row("1", "Wireless Headphones", "Electronics", 12999, 45),
        row("2", "Cotton T-Shirt", "Clothing", 2499, 120),
        row("3", "Smart Watch", "Electronics", 19999, 0),
        row("4", "Kitchen Blender", "Home & Kitchen", 7999, 8),
        row("5", "Denim Jeans", "Clothing", 4999, 35),
    ]
}

/// Sample managed orders.
#[must_use]
pub fn seed_orders() -> Vec<AdminOrder> {
    let row = |id: &str,
               customer: &str,
               placed: NaiveDate,
               cents: i64,
               status: OrderStatus,
               payment: PaymentStatus,
               items: u32| AdminOrder {
        id: OrderId::new(id),
        customer: customer.to_owned(),
        placed_on: placed,
        total: Decimal::new(cents, 2),
        status,
        payment_status: payment,
        item_count: items,
        status_note: None,
    };

    vec![
        row(
            "ORD-1001",
            "John Doe",
            date(2023, 5, 15),
            24997,
            OrderStatus::Delivered,
            PaymentStatus::Paid,
            2,
        ),
        row(
            "ORD-1002",
            "Jane Smith",
            date(2023, 6, 2),
            8999,
            OrderStatus::Shipped,
            PaymentStatus::Paid,
            1,
        ),
        row(
            "ORD-1003",
            "Robert Johnson",
            date(2023, 6, 10),
            16997,
            OrderStatus::Processing,
            PaymentStatus::Paid,
            2,
        ),
        row(
            "ORD-1004",
            "Emily Davis",
            date(2023, 6, 15),
            5999,
            OrderStatus::Cancelled,
            PaymentStatus::Refunded,
            1,
        ),
        row(
            "ORD-1005",
            "Michael Wilson",
            date(2023, 6, 18),
            10998,
            OrderStatus::Processing,
            PaymentStatus::Pending,
            3,
        ),
    ]
}

/// Sample user accounts.
#[must_use]
pub fn seed_users() -> Vec<AdminUser> {
    let row = |id: &str,
               name: &str,
               mail: &str,
               role: UserRole,
               status: AccountStatus,
               joined: NaiveDate| AdminUser {
        id: UserId::new(id),
        name: name.to_owned(),
        email: email(mail),
        role,
        status,
        joined_on: joined,
        avatar: format!("avatar-{id}"),
    };

    vec![
        row(
            "1",
            "John Doe",
            "john.doe@example.com",
            UserRole::Customer,
            AccountStatus::Active,
            date(2023, 1, 15),
        ),
        row(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            UserRole::Admin,
            AccountStatus::Active,
            date(2023, 2, 20),
        ),
        row(
            "3",
            "Robert Johnson",
            "robert.johnson@example.com",
            UserRole::Customer,
            AccountStatus::Inactive,
            date(2023, 3, 10),
        ),
        row(
            "4",
            "Emily Davis",
            "emily.davis@example.com",
            UserRole::Traveller,
            AccountStatus::Active,
            date(2023, 4, 5),
        ),
        row(
            "5",
            "Michael Wilson",
            "michael.wilson@example.com",
            UserRole::Customer,
            AccountStatus::Suspended,
            date(2023, 5, 12),
        ),
    ]
}

/// Sample traveller applications.
#[must_use]
pub fn seed_travellers() -> Vec<Traveller> {
    let row = |id: &str,
               name: &str,
               mail: &str,
               destination: &str,
               travel: NaiveDate,
               status: TravellerStatus,
               submitted: NaiveDate| Traveller {
        id: TravellerId::new(id),
        name: name.to_owned(),
        email: email(mail),
        destination: destination.to_owned(),
        travel_date: travel,
        status,
        submitted_on: submitted,
        avatar: format!("avatar-{id}"),
        rejection_reason: None,
    };

    vec![
        row(
            "1",
            "John Doe",
            "john.doe@example.com",
            "Japan",
            date(2023, 8, 15),
            TravellerStatus::PendingApproval,
            date(2023, 5, 10),
        ),
        row(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            "France",
            date(2023, 9, 20),
            TravellerStatus::Approved,
            date(2023, 5, 5),
        ),
        row(
            "3",
            "Robert Johnson",
            "robert.johnson@example.com",
            "Australia",
            date(2023, 10, 10),
            TravellerStatus::Rejected,
            date(2023, 5, 8),
        ),
        row(
            "4",
            "Emily Davis",
            "emily.davis@example.com",
            "Italy",
            date(2023, 11, 5),
            TravellerStatus::PendingApproval,
            date(2023, 5, 12),
        ),
        row(
            "5",
            "Michael Wilson",
            "michael.wilson@example.com",
            "Spain",
            date(2023, 12, 15),
            TravellerStatus::Approved,
            date(2023, 5, 1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_travellers_cover_every_status() {
        let travellers = seed_travellers();
        for status in [
            TravellerStatus::PendingApproval,
            TravellerStatus::Approved,
            TravellerStatus::Rejected,
        ] {
            assert!(travellers.iter().any(|t| t.status == status));
        }
    }
}
