//! Integration tests for ShopEase.
//!
//! Each test spawns the service under test in-process on an ephemeral
//! port and drives it over HTTP with `reqwest`. Storage is in-memory and
//! the simulated backend runs with zero latency, so the suite needs no
//! external services and no environment setup.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopease-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::IpAddr;
use std::sync::Arc;

use reqwest::Client;
use secrecy::SecretString;

use shopease_admin::backend::SimulatedAdminBackend;
use shopease_admin::config::AdminConfig;
use shopease_storefront::backend::SimulatedBackend;
use shopease_storefront::config::StorefrontConfig;
use shopease_storefront::store::MemoryStorage;

/// Secret used by both test services (only needs to satisfy the length
/// check).
const TEST_SESSION_SECRET: &str = "integration-test-session-secret-0123456789";

/// Spawn the storefront with memory storage and an instant backend.
/// Returns its base URL.
pub async fn spawn_storefront() -> String {
    let config = StorefrontConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        data_dir: std::env::temp_dir().join("shopease-unused"),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        latency_override: None,
    };

    let state = shopease_storefront::state::AppState::with_parts(
        config,
        MemoryStorage::shared(),
        Arc::new(SimulatedBackend::instant()),
    );
    serve(shopease_storefront::app(state)).await
}

/// Spawn the admin panel with seeded tables and an instant backend.
/// Returns its base URL.
pub async fn spawn_admin() -> String {
    let config = AdminConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost:3001".to_owned(),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        latency_override: None,
    };

    let state = shopease_admin::state::AppState::with_backend(
        config,
        Arc::new(SimulatedAdminBackend::instant()),
    );
    serve(shopease_admin::app(state)).await
}

/// Bind an ephemeral port, serve the router in the background, and
/// return the base URL.
async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has a local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("test server crashed");
    });

    format!("http://{addr}")
}

/// Create an HTTP client with a cookie store (for session flows).
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
