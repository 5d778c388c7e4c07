//! Catalog route handlers.

use aroma_core::{Category, Product};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use tracing::instrument;

use crate::catalog::{CatalogParams, CatalogQuery};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Filtered and sorted catalog listing.
///
/// GET /catalog?search=&audience=&category=&minPrice=&maxPrice=&sort=
///
/// Parameters that fail to parse are treated as absent; an unknown audience
/// or category matches nothing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    params: std::result::Result<Query<CatalogParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(params) = params?;
    let query = CatalogQuery::from(params);
    let products: Vec<Product> = state
        .catalog()
        .query(&query)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(count = products.len(), "Catalog query served");
    Ok(Json(products))
}

/// Featured products in catalog order.
///
/// GET /catalog/featured
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().featured().into_iter().cloned().collect())
}

/// Product detail.
///
/// GET /catalog/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    state
        .catalog()
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}

/// Distinct categories present in the catalog.
///
/// GET /categories
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories())
}
