//! Integration tests for the admin panel.
//!
//! Covers the simulated login gate and the product/order/user/traveller
//! management flows against the seeded in-memory tables.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shopease_integration_tests::{client, spawn_admin};

/// Log the client in as an admin (any email containing "admin" passes
/// the simulated check).
async fn login(client: &Client, base_url: &str) {
    let status = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "admin@shopease.example", "password": "anything" }))
        .send()
        .await
        .expect("login request")
        .status();
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Auth gate
// ============================================================================

#[tokio::test]
async fn test_management_routes_require_login() {
    let base_url = spawn_admin().await;
    let client = client();

    for path in ["/products", "/orders", "/users", "/travellers", "/dashboard"] {
        let status = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("request")
            .status();
        assert_eq!(status, StatusCode::UNAUTHORIZED, "path {path}");
    }
}

#[tokio::test]
async fn test_non_admin_email_is_rejected() {
    let base_url = spawn_admin().await;
    let client = client();

    let status = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "customer@shopease.example", "password": "anything" }))
        .send()
        .await
        .expect("login request")
        .status();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_product_list_includes_derived_stock_status() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let products: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("products request")
        .json()
        .await
        .expect("products json");

    let rows = products.as_array().expect("product rows");
    assert_eq!(rows.len(), 5);

    let by_name = |name: &str| {
        rows.iter()
            .find(|p| p["name"] == name)
            .unwrap_or_else(|| panic!("{name} seeded"))
    };
    assert_eq!(by_name("Smart Watch")["status"], "out_of_stock");
    assert_eq!(by_name("Kitchen Blender")["status"], "low_stock");
    assert_eq!(by_name("Cotton T-Shirt")["status"], "in_stock");
}

#[tokio::test]
async fn test_create_update_delete_product() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    // Create
    let response = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "name": "Standing Desk",
            "category": "Home & Kitchen",
            "price": "299.99",
            "stock": 12
        }))
        .send()
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.expect("created json");
    let id = created["id"].as_str().expect("id").to_owned();

    // Update stock only
    let updated: Value = client
        .put(format!("{base_url}/products/{id}"))
        .json(&json!({ "stock": 3 }))
        .send()
        .await
        .expect("update request")
        .json()
        .await
        .expect("updated json");
    assert_eq!(updated["name"], "Standing Desk");
    assert_eq!(updated["status"], "low_stock");

    // Delete
    let status = client
        .delete(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("delete request")
        .status();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let status = client
        .get(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("show request")
        .status();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_validates_fields() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let status = client
        .post(format!("{base_url}/products"))
        .json(&json!({ "name": "", "category": "", "price": "1.00", "stock": 0 }))
        .send()
        .await
        .expect("create request")
        .status();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_order_status_update_with_note() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let order: Value = client
        .post(format!("{base_url}/orders/ORD-1003/status"))
        .json(&json!({ "status": "shipped", "note": "Left the warehouse" }))
        .send()
        .await
        .expect("status request")
        .json()
        .await
        .expect("order json");

    assert_eq!(order["status"], "shipped");
    assert_eq!(order["status_note"], "Left the warehouse");

    // The list filter now finds it under shipped
    let shipped: Value = client
        .get(format!("{base_url}/orders?status=shipped"))
        .send()
        .await
        .expect("orders request")
        .json()
        .await
        .expect("orders json");
    assert!(
        shipped
            .as_array()
            .expect("orders")
            .iter()
            .any(|o| o["id"] == "ORD-1003")
    );
}

#[tokio::test]
async fn test_invalid_order_status_is_rejected() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let status = client
        .post(format!("{base_url}/orders/ORD-1001/status"))
        .json(&json!({ "status": "teleported" }))
        .send()
        .await
        .expect("status request")
        .status();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_role_and_status_update() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let user: Value = client
        .put(format!("{base_url}/users/3"))
        .json(&json!({ "role": "traveller", "status": "active" }))
        .send()
        .await
        .expect("update request")
        .json()
        .await
        .expect("user json");

    assert_eq!(user["role"], "traveller");
    assert_eq!(user["status"], "active");
    assert_eq!(user["name"], "Robert Johnson");
}

#[tokio::test]
async fn test_delete_user() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let status = client
        .delete(format!("{base_url}/users/5"))
        .send()
        .await
        .expect("delete request")
        .status();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let users: Value = client
        .get(format!("{base_url}/users"))
        .send()
        .await
        .expect("users request")
        .json()
        .await
        .expect("users json");
    assert_eq!(users.as_array().expect("users").len(), 4);
}

// ============================================================================
// Travellers
// ============================================================================

#[tokio::test]
async fn test_traveller_approve_and_reject_flows() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    // Approve one pending application
    let approved: Value = client
        .post(format!("{base_url}/travellers/1/approve"))
        .send()
        .await
        .expect("approve request")
        .json()
        .await
        .expect("approved json");
    assert_eq!(approved["status"], "approved");

    // Rejection without a reason is a validation error
    let status = client
        .post(format!("{base_url}/travellers/4/reject"))
        .json(&json!({ "reason": "" }))
        .send()
        .await
        .expect("reject request")
        .status();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // With a reason it sticks
    let rejected: Value = client
        .post(format!("{base_url}/travellers/4/reject"))
        .json(&json!({ "reason": "Incomplete documents" }))
        .send()
        .await
        .expect("reject request")
        .json()
        .await
        .expect("rejected json");
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["rejection_reason"], "Incomplete documents");
}

#[tokio::test]
async fn test_traveller_list_filters_by_status() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let pending: Value = client
        .get(format!("{base_url}/travellers?status=pending"))
        .send()
        .await
        .expect("travellers request")
        .json()
        .await
        .expect("travellers json");

    let rows = pending.as_array().expect("travellers");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t["status"] == "pending_approval"));
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_reports_serve_fixed_datasets() {
    let base_url = spawn_admin().await;
    let client = client();
    login(&client, &base_url).await;

    let sales: Value = client
        .get(format!("{base_url}/reports/sales"))
        .send()
        .await
        .expect("sales request")
        .json()
        .await
        .expect("sales json");
    assert_eq!(sales["overview"].as_array().expect("overview").len(), 7);
    assert_eq!(sales["overview"][0]["name"], "Jan");
    assert_eq!(sales["overview"][0]["value"], 4000);

    let dashboard: Value = client
        .get(format!("{base_url}/dashboard"))
        .send()
        .await
        .expect("dashboard request")
        .json()
        .await
        .expect("dashboard json");
    assert_eq!(dashboard["cards"].as_array().expect("cards").len(), 4);
}
