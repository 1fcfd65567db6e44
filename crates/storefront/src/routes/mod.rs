//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero slides, featured)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (filters/sort/pages)
//! GET  /products/{id}          - Product detail with related products
//! GET  /products/categories    - Browsable categories
//!
//! # Cart
//! GET  /cart                   - Cart contents and totals
//! POST /cart/add               - Add product (merge-on-add)
//! POST /cart/update            - Set line quantity (<1 removes)
//! POST /cart/remove            - Remove line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge
//!
//! # Wishlist
//! GET  /wishlist               - Wishlist contents
//! POST /wishlist/toggle        - Save/un-save a product
//! POST /wishlist/remove        - Remove an entry
//! POST /wishlist/move-to-cart  - Move an entry into the cart
//! GET  /wishlist/count         - Wishlist count badge
//!
//! # Checkout
//! GET  /checkout               - Summary (totals, saved addresses)
//! POST /checkout               - Submit order (simulated)
//!
//! # Orders
//! GET  /orders                 - Order history (status tabs)
//! GET  /orders/{id}            - Order detail
//!
//! # Auth (simulated)
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//! POST /auth/register          - Register action
//! POST /auth/forgot-password   - Request reset link
//! GET  /auth/session           - Session status
//!
//! # Traveller
//! POST /traveller-registration - Submit traveller application
//!
//! # Events
//! GET  /events                 - SSE stream of store-change events
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod events;
pub mod home;
pub mod orders;
pub mod products;
pub mod traveller;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/categories", get(products::categories))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/toggle", post(wishlist::toggle))
        .route("/remove", post(wishlist::remove))
        .route("/move-to-cart", post(wishlist::move_to_cart))
        .route("/count", get(wishlist::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/register", post(auth::register))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/session", get(auth::session_status))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Wishlist routes
        .nest("/wishlist", wishlist_routes())
        // Checkout
        .route("/checkout", get(checkout::summary).post(checkout::submit))
        // Order history
        .nest("/orders", order_routes())
        // Auth routes
        .nest("/auth", auth_routes())
        // Traveller applications
        .route("/traveller-registration", post(traveller::submit))
        // Store-change event stream
        .route("/events", get(events::stream))
}
