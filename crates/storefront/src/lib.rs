//! Aroma Bills storefront library.
//!
//! JSON API over the fragrance catalog, product reviews and contact
//! messages. Exposed as a library so the router can be driven from the
//! integration tests and the operator CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, body::Body, http::Request};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are not included; the binary adds them on top.
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config().cors_origins);

    Router::new()
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;

    fn router() -> Router {
        app(AppState::seeded(StorefrontConfig::default()).unwrap())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_request_id_is_generated_and_echoed() {
        let (_, headers, _) = send(router(), get("/health")).await;
        assert!(headers.contains_key(middleware::REQUEST_ID_HEADER));

        let request = Request::get("/health")
            .header(middleware::REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(router(), request).await;
        assert_eq!(headers[middleware::REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let (_, headers, _) = send(router(), get("/catalog")).await;
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[tokio::test]
    async fn test_readiness_reflects_catalog() {
        let (status, _, _) = send(router(), get("/health/ready")).await;
        assert_eq!(status, StatusCode::OK);

        let empty = AppState::new(StorefrontConfig::default(), Catalog::new(Vec::new()).unwrap());
        let (status, _, _) = send(app(empty), get("/health/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let (status, _, body) = send(router(), get("/catalog/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_catalog_legacy_aliases() {
        let (status, _, body) =
            send(router(), get("/catalog?gender=Women&fragranceType=Floral&sortBy=price-low")).await;
        assert_eq!(status, StatusCode::OK);

        let products = body.as_array().unwrap();
        assert!(!products.is_empty());
        for product in products {
            assert_eq!(product["gender"], "Women");
            assert_eq!(product["fragranceType"], "Floral");
        }
    }

    #[tokio::test]
    async fn test_malformed_review_body_is_bad_request() {
        let (status, _, body) =
            send(router(), post_json("/products/1/reviews", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_contact_missing_fields() {
        let (status, _, body) = send(router(), post_json("/contact", r#"{"name":"Ana"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");
    }
}
