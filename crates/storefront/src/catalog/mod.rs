//! In-memory product catalog.
//!
//! The catalog is seeded once at startup and never changes afterwards, so it
//! is shared between handlers without any locking. Lookups are linear scans;
//! the catalog holds a handful of products and no index is needed.

mod query;
mod seed;

use std::collections::HashSet;

use aroma_core::{Category, Price, PriceError, Product};
use thiserror::Error;

pub use query::{CatalogParams, CatalogQuery, FacetFilter, SortKey};

/// Errors raised when a product list violates catalog invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
    #[error("product {0} has no scent notes")]
    MissingNotes(String),
    #[error("product {0} has no images")]
    MissingImages(String),
    #[error("product {0} primary image is not the first gallery image")]
    PrimaryImageMismatch(String),
    #[error("product {0} rating is outside 0.0-5.0")]
    RatingOutOfRange(String),
    #[error("product {id} has an invalid price: {source}")]
    NonPositivePrice { id: String, source: PriceError },
}

/// The full set of sellable products, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking every product invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for product in &products {
            let id = product.id.to_string();
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }
            if product.notes.is_empty() {
                return Err(CatalogError::MissingNotes(id));
            }
            match product.images.first() {
                None => return Err(CatalogError::MissingImages(id)),
                Some(first) if *first != product.image => {
                    return Err(CatalogError::PrimaryImageMismatch(id));
                }
                Some(_) => {}
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange(id));
            }
            if let Err(source) = Price::positive(product.price.amount()) {
                return Err(CatalogError::NonPositivePrice { id, source });
            }
        }

        Ok(Self { products })
    }

    /// The storefront's launch catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in seed data is inconsistent.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::products())
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact lookup by product id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id.as_str() == id)
    }

    /// Products flagged for promotion, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|product| product.featured).collect()
    }

    /// Distinct categories present in the catalog, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|product| product.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Run the search/filter/sort pipeline.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }
}
