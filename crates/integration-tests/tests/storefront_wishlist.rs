//! Integration tests for the storefront wishlist flow.

use serde_json::{Value, json};

use shopease_integration_tests::{client, spawn_storefront};

async fn toggle(client: &reqwest::Client, base_url: &str, id: &str) -> Value {
    client
        .post(format!("{base_url}/wishlist/toggle"))
        .json(&json!({ "product_id": id }))
        .send()
        .await
        .expect("toggle request")
        .json()
        .await
        .expect("toggle json")
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let base_url = spawn_storefront().await;
    let client = client();

    let saved = toggle(&client, &base_url, "4").await;
    assert_eq!(saved["in_wishlist"], true);
    assert_eq!(saved["count"], 1);

    let unsaved = toggle(&client, &base_url, "4").await;
    assert_eq!(unsaved["in_wishlist"], false);
    assert_eq!(unsaved["count"], 0);
}

#[tokio::test]
async fn test_wishlist_lists_denormalized_entries() {
    let base_url = spawn_storefront().await;
    let client = client();

    toggle(&client, &base_url, "2").await;
    toggle(&client, &base_url, "8").await;

    let wishlist: Value = client
        .get(format!("{base_url}/wishlist"))
        .send()
        .await
        .expect("wishlist request")
        .json()
        .await
        .expect("wishlist json");

    let entries = wishlist["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "Cotton T-Shirt");
    assert_eq!(entries[0]["category"], "Clothing");
    assert_eq!(entries[1]["name"], "Yoga Mat");
}

#[tokio::test]
async fn test_move_to_cart_transfers_entry() {
    let base_url = spawn_storefront().await;
    let client = client();
    toggle(&client, &base_url, "5").await;

    let moved: Value = client
        .post(format!("{base_url}/wishlist/move-to-cart"))
        .json(&json!({ "id": "5" }))
        .send()
        .await
        .expect("move request")
        .json()
        .await
        .expect("move json");

    assert_eq!(moved["cart_count"], 1);
    assert_eq!(moved["wishlist_count"], 0);

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("cart request")
        .json()
        .await
        .expect("cart json");
    assert_eq!(cart["items"][0]["id"], "5");
    assert_eq!(cart["items"][0]["name"], "Bluetooth Speaker");
}

#[tokio::test]
async fn test_move_to_cart_requires_saved_entry() {
    let base_url = spawn_storefront().await;
    let client = client();

    let status = client
        .post(format!("{base_url}/wishlist/move-to-cart"))
        .json(&json!({ "id": "7" }))
        .send()
        .await
        .expect("move request")
        .status();

    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
}
