//! Sample order history and saved addresses.
//!
//! Like the catalog, order history is a hard-coded dataset; there is no
//! fulfillment system behind it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopease_core::{AddressId, OrderId, OrderStatus, PaymentStatus, ProductId};

/// One line of a past order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

/// A past order as shown on the order-history page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_estimate: Option<String>,
    pub shipping_address: String,
}

/// A saved shipping address offered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: AddressId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub is_default: bool,
}

impl SavedAddress {
    /// Single-line rendering used in order submissions.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address, self.city, self.state, self.zip, self.country
        )
    }
}

fn item(id: &str, name: &str, cents: i64, quantity: u32, image: &str) -> OrderItem {
    OrderItem {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        quantity,
        image: image.to_owned(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The sample order history.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-1001"),
            placed_on: date(2023, 5, 15),
            total: Decimal::new(24997, 2),
            status: OrderStatus::Delivered,
            items: vec![
                item("1", "Wireless Headphones", 9999, 1, "headphones"),
                item("3", "Smart Watch", 14998, 1, "watch"),
            ],
            payment_status: PaymentStatus::Paid,
            payment_method: "Credit Card".to_owned(),
            tracking_number: Some("TRK123456789".to_owned()),
            delivery_estimate: Some("May 20, 2023".to_owned()),
            shipping_address: "123 Main St, Anytown, USA".to_owned(),
        },
        Order {
            id: OrderId::new("ORD-1002"),
            placed_on: date(2023, 6, 2),
            total: Decimal::new(8999, 2),
            status: OrderStatus::Shipped,
            items: vec![item("6", "Denim Jacket", 8999, 1, "jacket")],
            payment_status: PaymentStatus::Paid,
            payment_method: "PayPal".to_owned(),
            tracking_number: Some("TRK987654321".to_owned()),
            delivery_estimate: Some("June 7, 2023 (Expected)".to_owned()),
            shipping_address: "456 Oak Ave, Somewhere, USA".to_owned(),
        },
        Order {
            id: OrderId::new("ORD-1003"),
            placed_on: date(2023, 6, 10),
            total: Decimal::new(16997, 2),
            status: OrderStatus::Processing,
            items: vec![
                item("7", "Coffee Maker", 12999, 1, "coffee"),
                item("12", "Water Bottle", 1999, 2, "bottle"),
            ],
            payment_status: PaymentStatus::Paid,
            payment_method: "Credit Card".to_owned(),
            tracking_number: None,
            delivery_estimate: Some("June 15, 2023 (Expected)".to_owned()),
            shipping_address: "789 Pine St, Elsewhere, USA".to_owned(),
        },
        Order {
            id: OrderId::new("ORD-1004"),
            placed_on: date(2023, 6, 15),
            total: Decimal::new(5999, 2),
            status: OrderStatus::Cancelled,
            items: vec![item("5", "Bluetooth Speaker", 5999, 1, "speaker")],
            payment_status: PaymentStatus::Refunded,
            payment_method: "Credit Card".to_owned(),
            tracking_number: None,
            delivery_estimate: None,
            shipping_address: "123 Main St, Anytown, USA".to_owned(),
        },
    ]
}

/// The sample saved addresses offered at checkout.
#[must_use]
pub fn saved_addresses() -> Vec<SavedAddress> {
    vec![
        SavedAddress {
            id: AddressId::new("1"),
            name: "John Doe".to_owned(),
            address: "123 Main St".to_owned(),
            city: "Anytown".to_owned(),
            state: "CA".to_owned(),
            zip: "12345".to_owned(),
            country: "United States".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            is_default: true,
        },
        SavedAddress {
            id: AddressId::new("2"),
            name: "John Doe".to_owned(),
            address: "456 Oak Ave".to_owned(),
            city: "Somewhere".to_owned(),
            state: "NY".to_owned(),
            zip: "67890".to_owned(),
            country: "United States".to_owned(),
            phone: "+1 (555) 987-6543".to_owned(),
            is_default: false,
        },
    ]
}
