//! Integration tests for the contact form and cross-cutting HTTP behaviour.

use aroma_integration_tests::spawn_storefront;
use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_accepted() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .post(server.url("/contact"))
        .json(&json!({
            "name": "Ana",
            "email": " Ana@Example.com ",
            "message": "Do you ship to Lisbon?"
        }))
        .send()
        .await
        .expect("Failed to send contact message");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Thank you for your message! We will get back to you soon."
    );
    assert_eq!(body["contact"]["name"], "Ana");
    assert_eq!(body["contact"]["email"], "Ana@Example.com");
    assert!(body["contact"]["id"].is_string());
}

#[tokio::test]
async fn test_contact_missing_fields() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .post(server.url("/contact"))
        .json(&json!({"name": "Ana", "email": "ana@example.com", "message": ""}))
        .send()
        .await
        .expect("Failed to send contact message");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_contact_accepts_unusual_email_as_submitted() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .post(server.url("/contact"))
        .json(&json!({"name": "Ana", "email": "not-an-email", "message": "Hi"}))
        .send()
        .await
        .expect("Failed to send contact message");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["contact"]["email"], "not-an-email");
}

// ============================================================================
// Health & Headers Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let server = spawn_storefront().await;

    for path in ["/health", "/health/ready"] {
        let resp = server
            .client
            .get(server.url(path))
            .send()
            .await
            .expect("Failed to call health endpoint");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
    }
}

#[tokio::test]
async fn test_request_id_header() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .get(server.url("/catalog"))
        .send()
        .await
        .expect("Failed to send request");
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = server
        .client
        .get(server.url("/catalog"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me")
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .get(server.url("/catalog/featured"))
        .header("origin", "https://shop.example")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
