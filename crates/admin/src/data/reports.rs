//! Mock analytics datasets.
//!
//! The admin reports are fixed series; chart rendering is the client's
//! concern, this module only serves the numbers.

use rust_decimal::Decimal;
use serde::Serialize;

/// A `name -> value` data point, the shape every chart series uses.
#[derive(Debug, Clone, Serialize)]
pub struct DataPoint {
    pub name: String,
    pub value: i64,
}

fn point(name: &str, value: i64) -> DataPoint {
    DataPoint {
        name: name.to_owned(),
        value,
    }
}

fn series(points: &[(&str, i64)]) -> Vec<DataPoint> {
    points.iter().map(|(name, value)| point(name, *value)).collect()
}

/// A category sales/returns pair.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPerformance {
    pub name: String,
    pub sales: i64,
    pub returns: i64,
}

/// One headline stat card on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    /// Percent change versus the previous period.
    pub change_pct: Decimal,
}

fn stat(label: &str, value: &str, change_tenths: i64) -> StatCard {
    StatCard {
        label: label.to_owned(),
        value: value.to_owned(),
        change_pct: Decimal::new(change_tenths, 1),
    }
}

/// Dashboard headline stats.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub cards: Vec<StatCard>,
}

/// The sales report payload.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    /// Monthly sales totals.
    pub overview: Vec<DataPoint>,
    /// Revenue by product category.
    pub revenue_by_category: Vec<DataPoint>,
    /// Order volume by payment method.
    pub payment_methods: Vec<DataPoint>,
}

/// The customers report payload.
#[derive(Debug, Clone, Serialize)]
pub struct CustomersReport {
    /// New customers per month.
    pub acquisition: Vec<DataPoint>,
    /// New / returning / loyal split.
    pub segmentation: Vec<DataPoint>,
    /// Customers by age bracket.
    pub age_distribution: Vec<DataPoint>,
}

/// The products report payload.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsReport {
    /// Units sold for the best sellers.
    pub top_selling: Vec<DataPoint>,
    /// In/low/out-of-stock split.
    pub stock_status: Vec<DataPoint>,
    /// Sales and returns per category.
    pub category_performance: Vec<CategoryPerformance>,
}

/// Dashboard stat cards.
#[must_use]
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        cards: vec![
            stat("Total Revenue", "$45,231.89", 201),
            stat("Total Orders", "2,350", 122),
            stat("Active Users", "12,234", 190),
            stat("Conversion Rate", "3.2%", 11),
        ],
    }
}

/// The sales report dataset.
#[must_use]
pub fn sales_report() -> SalesReport {
    SalesReport {
        overview: series(&[
            ("Jan", 4000),
            ("Feb", 3000),
            ("Mar", 2000),
            ("Apr", 2780),
            ("May", 1890),
            ("Jun", 2390),
            ("Jul", 3490),
        ]),
        revenue_by_category: series(&[
            ("Electronics", 4000),
            ("Clothing", 3000),
            ("Home", 2000),
            ("Beauty", 2780),
            ("Sports", 1890),
        ]),
        payment_methods: series(&[
            ("Credit Card", 540),
            ("PayPal", 320),
            ("Bank Transfer", 210),
            ("Cash on Delivery", 170),
        ]),
    }
}

/// The customers report dataset.
#[must_use]
pub fn customers_report() -> CustomersReport {
    CustomersReport {
        acquisition: series(&[
            ("Jan", 400),
            ("Feb", 300),
            ("Mar", 200),
            ("Apr", 278),
            ("May", 189),
            ("Jun", 239),
            ("Jul", 349),
        ]),
        segmentation: series(&[("New", 400), ("Returning", 300), ("Loyal", 300)]),
        age_distribution: series(&[
            ("18-24", 120),
            ("25-34", 180),
            ("35-44", 210),
            ("45-54", 190),
            ("55-64", 150),
            ("65+", 110),
        ]),
    }
}

/// The products report dataset.
#[must_use]
pub fn products_report() -> ProductsReport {
    let perf = |name: &str, sales: i64, returns: i64| CategoryPerformance {
        name: name.to_owned(),
        sales,
        returns,
    };

    ProductsReport {
        top_selling: series(&[
            ("Wireless Headphones", 120),
            ("Smart Watch", 98),
            ("Laptop", 86),
            ("Smartphone", 72),
            ("Tablet", 65),
        ]),
        stock_status: series(&[("In Stock", 65), ("Low Stock", 15), ("Out of Stock", 20)]),
        category_performance: vec![
            perf("Electronics", 4000, 400),
            perf("Clothing", 3000, 300),
            perf("Home", 2000, 200),
            perf("Beauty", 2780, 278),
            perf("Sports", 1890, 189),
        ],
    }
}
