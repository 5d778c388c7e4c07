//! Integration tests for product reviews.

use aroma_integration_tests::{TestServer, spawn_storefront};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn list_reviews(server: &TestServer, product_id: &str) -> Vec<Value> {
    let resp = server
        .client
        .get(server.url(&format!("/products/{product_id}/reviews")))
        .send()
        .await
        .expect("Failed to list reviews");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse reviews")
}

async fn submit_review(server: &TestServer, product_id: &str, body: &Value) -> (StatusCode, Value) {
    let resp = server
        .client
        .post(server.url(&format!("/products/{product_id}/reviews")))
        .json(body)
        .send()
        .await
        .expect("Failed to submit review");
    let status = resp.status();
    let body = resp.json().await.expect("Failed to parse response");
    (status, body)
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_new_product_has_no_reviews() {
    let server = spawn_storefront().await;

    assert!(list_reviews(&server, "1").await.is_empty());
}

#[tokio::test]
async fn test_submit_review_returns_created() {
    let server = spawn_storefront().await;

    let (status, review) = submit_review(
        &server,
        "1",
        &json!({"name": "Ana", "rating": 5, "comment": "Lovely"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["productId"], "1");
    assert_eq!(review["name"], "Ana");
    assert_eq!(review["rating"], 5);
    assert!(review["id"].is_string());
    assert!(review["date"].is_string());
}

#[tokio::test]
async fn test_reviews_are_listed_newest_first() {
    let server = spawn_storefront().await;

    for name in ["First", "Second", "Third"] {
        let (status, _) = submit_review(
            &server,
            "3",
            &json!({"name": name, "rating": 4, "comment": "Fresh"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let names: Vec<String> = list_reviews(&server, "3")
        .await
        .iter()
        .filter_map(|r| r["name"].as_str().map(String::from))
        .collect();
    assert_eq!(names, ["Third", "Second", "First"]);

    // Other products are unaffected
    assert!(list_reviews(&server, "4").await.is_empty());
}

#[tokio::test]
async fn test_review_for_unknown_product_is_accepted() {
    let server = spawn_storefront().await;

    let (status, _) = submit_review(
        &server,
        "does-not-exist",
        &json!({"name": "Ana", "rating": 3, "comment": "Where is it?"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(list_reviews(&server, "does-not-exist").await.len(), 1);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_reviews_are_rejected_without_mutation() {
    let server = spawn_storefront().await;

    let invalid = [
        json!({"name": "", "rating": 5, "comment": "Nice"}),
        json!({"name": "Ana", "rating": 5, "comment": "   "}),
        json!({"name": "Ana", "rating": 0, "comment": "Nice"}),
        json!({"name": "Ana", "rating": 6, "comment": "Nice"}),
        json!({"name": "Ana", "comment": "Nice"}),
    ];

    for body in &invalid {
        let (status, error) = submit_review(&server, "2", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {body}");
        assert!(error["message"].is_string());
    }

    assert!(list_reviews(&server, "2").await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = spawn_storefront().await;

    let resp = server
        .client
        .post(server.url("/products/1/reviews"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}
