//! Catalog inspection commands.
//!
//! Every command renders pretty-printed JSON in the same shape the HTTP API
//! returns, so output can be diffed against a running storefront.

use aroma_storefront::catalog::{Catalog, CatalogError, CatalogParams, CatalogQuery};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// The built-in catalog is inconsistent.
    #[error("Catalog failed validation: {0}")]
    Catalog(#[from] CatalogError),

    /// No product has the requested id.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Output could not be rendered.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, CatalogCommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Filtered and sorted listing.
///
/// # Errors
///
/// Returns an error if the catalog fails validation or rendering fails.
pub fn list(params: CatalogParams) -> Result<String, CatalogCommandError> {
    let catalog = Catalog::seeded()?;
    let query = CatalogQuery::from(params);
    let products = catalog.query(&query);
    tracing::debug!(count = products.len(), "Catalog listed");
    render(&products)
}

/// A single product by id.
///
/// # Errors
///
/// Returns `CatalogCommandError::NotFound` for an unknown id.
pub fn show(id: &str) -> Result<String, CatalogCommandError> {
    let catalog = Catalog::seeded()?;
    let product = catalog
        .find(id)
        .ok_or_else(|| CatalogCommandError::NotFound(id.to_string()))?;
    render(product)
}

/// Featured products in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog fails validation or rendering fails.
pub fn featured() -> Result<String, CatalogCommandError> {
    render(&Catalog::seeded()?.featured())
}

/// Distinct categories in first-appearance order.
///
/// # Errors
///
/// Returns an error if the catalog fails validation or rendering fails.
pub fn categories() -> Result<String, CatalogCommandError> {
    render(&Catalog::seeded()?.categories())
}
