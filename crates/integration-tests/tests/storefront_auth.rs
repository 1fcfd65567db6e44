//! Integration tests for the simulated storefront auth flows.

use reqwest::StatusCode;
use serde_json::{Value, json};

use shopease_integration_tests::{client, spawn_storefront};

// ============================================================================
// Registration validation
// ============================================================================

#[tokio::test]
async fn test_registration_surfaces_field_errors() {
    let base_url = spawn_storefront().await;
    let client = client();

    let response = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "email": "not-an-email",
            "password": "short",
            "confirm_password": "different"
        }))
        .send()
        .await
        .expect("register request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json().await.expect("error json");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["field"].as_str().expect("field name"))
        .collect();

    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert!(fields.contains(&"confirm_password"));
}

#[tokio::test]
async fn test_valid_registration_is_created() {
    let base_url = spawn_storefront().await;
    let client = client();

    let response = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "email": "new.user@example.com",
            "password": "password1",
            "confirm_password": "password1",
            "user_type": "traveller"
        }))
        .send()
        .await
        .expect("register request");

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ============================================================================
// Login / Session / Logout
// ============================================================================

#[tokio::test]
async fn test_login_establishes_session() {
    let base_url = spawn_storefront().await;
    let client = client();

    // Anonymous first
    let session: Value = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("session request")
        .json()
        .await
        .expect("session json");
    assert_eq!(session["logged_in"], false);

    let response = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "user@example.com", "password": "password1" }))
        .send()
        .await
        .expect("login request");
    assert_eq!(response.status(), StatusCode::OK);

    let session: Value = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("session request")
        .json()
        .await
        .expect("session json");
    assert_eq!(session["logged_in"], true);
    assert_eq!(session["email"], "user@example.com");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let base_url = spawn_storefront().await;
    let client = client();

    client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "user@example.com", "password": "password1" }))
        .send()
        .await
        .expect("login request");

    client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("logout request");

    let session: Value = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("session request")
        .json()
        .await
        .expect("session json");
    assert_eq!(session["logged_in"], false);
}

#[tokio::test]
async fn test_login_validates_fields() {
    let base_url = spawn_storefront().await;
    let client = client();

    let status = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await
        .expect("login request")
        .status();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Traveller registration
// ============================================================================

#[tokio::test]
async fn test_traveller_registration_requires_terms() {
    let base_url = spawn_storefront().await;
    let client = client();

    let response = client
        .post(format!("{base_url}/traveller-registration"))
        .json(&json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john.doe@example.com",
            "phone": "+1 (555) 123-4567",
            "address": "123 Main St",
            "city": "Anytown",
            "state": "CA",
            "zip": "12345",
            "country": "United States",
            "vehicle_type": "car",
            "route_from": "Anytown",
            "route_to": "Somewhere",
            "available_days": ["monday"],
            "agree_terms": false,
            "agree_background": true
        }))
        .send()
        .await
        .expect("traveller request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_traveller_registration_accepts_complete_form() {
    let base_url = spawn_storefront().await;
    let client = client();

    let response = client
        .post(format!("{base_url}/traveller-registration"))
        .json(&json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "john.doe@example.com",
            "phone": "+1 (555) 123-4567",
            "address": "123 Main St",
            "city": "Anytown",
            "state": "CA",
            "zip": "12345",
            "country": "United States",
            "vehicle_type": "car",
            "vehicle_make": "Toyota",
            "vehicle_model": "Corolla",
            "vehicle_year": "2020",
            "license_plate": "7ABC123",
            "route_from": "Anytown",
            "route_to": "Somewhere",
            "available_days": ["monday", "friday"],
            "driving_license": "doc-1",
            "vehicle_registration": "doc-2",
            "insurance": "doc-3",
            "agree_terms": true,
            "agree_background": true
        }))
        .send()
        .await
        .expect("traveller request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let receipt: Value = response.json().await.expect("receipt json");
    let id = receipt["application_id"].as_str().expect("application id");
    assert!(id.starts_with("TRV-"));
}
