//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Auth (simulated JWT check)
//! POST /auth/login                - Login action
//! POST /auth/logout               - Logout action
//!
//! # Dashboard & reports (require admin session)
//! GET  /dashboard                 - Headline stats
//! GET  /reports/sales             - Sales datasets
//! GET  /reports/customers         - Customer datasets
//! GET  /reports/products          - Product datasets
//!
//! # Products
//! GET    /products                - List with derived stock status
//! POST   /products                - Create
//! GET    /products/{id}           - Show
//! PUT    /products/{id}           - Partial update
//! DELETE /products/{id}           - Delete
//!
//! # Orders
//! GET  /orders                    - List (status filter)
//! GET  /orders/{id}               - Show
//! POST /orders/{id}/status        - Update status with optional note
//!
//! # Users
//! GET    /users                   - List
//! PUT    /users/{id}              - Update name/role/status
//! DELETE /users/{id}              - Delete
//!
//! # Travellers
//! GET  /travellers                - List (status filter)
//! GET  /travellers/{id}           - Show
//! POST /travellers/{id}/approve   - Approve application
//! POST /travellers/{id}/reject    - Reject with mandatory reason
//! ```

pub mod auth;
pub mod orders;
pub mod products;
pub mod reports;
pub mod travellers;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", post(orders::update_status))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/{id}", put(users::update).delete(users::destroy))
}

/// Create the traveller routes router.
pub fn traveller_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(travellers::index))
        .route("/{id}", get(travellers::show))
        .route("/{id}/approve", post(travellers::approve))
        .route("/{id}/reject", post(travellers::reject))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .route("/dashboard", get(reports::dashboard))
        .route("/reports/sales", get(reports::sales))
        .route("/reports/customers", get(reports::customers))
        .route("/reports/products", get(reports::products))
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/users", user_routes())
        .nest("/travellers", traveller_routes())
}
