//! Review store.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use aroma_core::ProductId;
use chrono::Utc;

use super::RepositoryError;
use crate::models::{Review, ReviewDraft};

/// Append-only reviews, grouped by product.
///
/// The store does not check that a product exists; a review for an unknown
/// product is stored and simply never shown by catalog browsing.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: RwLock<HashMap<ProductId, VecDeque<Review>>>,
}

impl ReviewStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All reviews for a product, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store lock is poisoned.
    pub fn list(&self, product_id: &ProductId) -> Result<Vec<Review>, RepositoryError> {
        let reviews = self
            .reviews
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("review"))?;

        Ok(reviews
            .get(product_id)
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Store a validated review, stamped now, ahead of existing ones.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store lock is poisoned.
    pub fn submit(
        &self,
        product_id: ProductId,
        draft: ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        let review = Review::new(product_id, draft, Utc::now());

        self.reviews
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("review"))?
            .entry(review.product_id.clone())
            .or_default()
            .push_front(review.clone());

        tracing::debug!(review_id = %review.id, product_id = %review.product_id, "Review stored");
        Ok(review)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::models::NewReview;

    fn draft(name: &str, rating: i64) -> ReviewDraft {
        NewReview {
            name: Some(name.to_string()),
            rating: Some(rating),
            comment: Some("Lovely".to_string()),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_list_unknown_product_is_empty() {
        let store = ReviewStore::new();
        assert!(store.list(&ProductId::from("1")).unwrap().is_empty());
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let store = ReviewStore::new();
        let id = ProductId::from("1");

        store.submit(id.clone(), draft("first", 3)).unwrap();
        store.submit(id.clone(), draft("second", 4)).unwrap();
        store.submit(id.clone(), draft("third", 5)).unwrap();

        let names: Vec<_> = store
            .list(&id)
            .unwrap()
            .into_iter()
            .map(|review| review.name)
            .collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[test]
    fn test_submit_returns_stored_review() {
        let store = ReviewStore::new();
        let id = ProductId::from("2");

        let review = store.submit(id.clone(), draft("Maya", 5)).unwrap();
        let listed = store.list(&id).unwrap();

        assert_eq!(listed, [review.clone()]);
        assert_eq!(review.product_id, id);
        assert_eq!(review.rating.stars(), 5);
    }

    #[test]
    fn test_reviews_are_kept_per_product() {
        let store = ReviewStore::new();
        store.submit(ProductId::from("1"), draft("a", 5)).unwrap();
        store.submit(ProductId::from("2"), draft("b", 4)).unwrap();

        assert_eq!(store.list(&ProductId::from("1")).unwrap().len(), 1);
        assert_eq!(store.list(&ProductId::from("2")).unwrap()[0].name, "b");
    }

    #[test]
    fn test_unknown_product_is_accepted() {
        let store = ReviewStore::new();
        let ghost = ProductId::from("does-not-exist");

        store.submit(ghost.clone(), draft("Maya", 2)).unwrap();
        assert_eq!(store.list(&ghost).unwrap().len(), 1);
    }
}
