//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (catalog seeded)
//!
//! # Catalog
//! GET  /catalog                    - Filtered, sorted product listing
//! GET  /catalog/featured           - Featured products
//! GET  /catalog/{id}               - Product detail
//! GET  /categories                 - Distinct fragrance categories
//!
//! # Reviews
//! GET  /products/{id}/reviews      - Reviews for a product, newest first
//! POST /products/{id}/reviews      - Submit a review
//!
//! # Contact
//! POST /contact                    - Submit a contact message
//! ```

pub mod catalog;
pub mod contact;
pub mod health;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::live))
        .route("/health/ready", get(health::ready))
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::index))
        .route("/catalog/featured", get(catalog::featured))
        .route("/catalog/{id}", get(catalog::show))
        .route("/categories", get(catalog::categories))
}

/// Create the review routes router.
pub fn review_routes() -> Router<AppState> {
    Router::new().route(
        "/products/{id}/reviews",
        get(reviews::index).post(reviews::create),
    )
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit))
}

/// Create all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(catalog_routes())
        .merge(review_routes())
        .merge(contact_routes())
}
