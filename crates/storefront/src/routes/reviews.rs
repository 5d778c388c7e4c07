//! Product review route handlers.

use aroma_core::ProductId;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::{NewReview, Review};
use crate::state::AppState;

/// Reviews for a product, most recent first.
///
/// GET /products/{id}/reviews
///
/// Unknown products simply have no reviews.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state.reviews().list(&ProductId::from(id))?;
    Ok(Json(reviews))
}

/// Submit a review.
///
/// POST /products/{id}/reviews
///
/// The product id is not checked against the catalog.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<NewReview>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>)> {
    let Json(body) = payload?;
    let draft = body.validate()?;

    let product_id = ProductId::from(id);
    let review = state.reviews().submit(product_id.clone(), draft)?;

    add_breadcrumb(
        "reviews",
        "Submitted review",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(
        product_id = %product_id,
        review_id = %review.id,
        rating = review.rating.stars(),
        "Review submitted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}
