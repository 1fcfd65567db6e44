//! Dashboard and report route handlers.
//!
//! Reports serve fixed datasets; there is no analytics pipeline behind
//! them.

use axum::Json;

use crate::data::reports::{
    CustomersReport, DashboardStats, ProductsReport, SalesReport, customers_report,
    dashboard_stats, products_report, sales_report,
};
use crate::middleware::RequireAdminAuth;

/// Dashboard headline stats.
pub async fn dashboard(RequireAdminAuth(_admin): RequireAdminAuth) -> Json<DashboardStats> {
    Json(dashboard_stats())
}

/// Sales report datasets.
pub async fn sales(RequireAdminAuth(_admin): RequireAdminAuth) -> Json<SalesReport> {
    Json(sales_report())
}

/// Customers report datasets.
pub async fn customers(RequireAdminAuth(_admin): RequireAdminAuth) -> Json<CustomersReport> {
    Json(customers_report())
}

/// Products report datasets.
pub async fn products(RequireAdminAuth(_admin): RequireAdminAuth) -> Json<ProductsReport> {
    Json(products_report())
}
