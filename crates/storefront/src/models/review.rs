//! Product reviews.

use aroma_core::{ProductId, Rating, RatingError, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::required_text;

/// Reasons a review submission is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("name is required")]
    MissingName,
    #[error("comment is required")]
    MissingComment,
    #[error("rating is required")]
    MissingRating,
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Author display name.
    pub name: String,
    pub rating: Rating,
    pub comment: String,
    /// Submission time.
    pub date: DateTime<Utc>,
}

impl Review {
    /// Stamp a validated draft with a fresh id and the given time.
    #[must_use]
    pub fn new(product_id: ProductId, draft: ReviewDraft, date: DateTime<Utc>) -> Self {
        Self {
            id: ReviewId::generate(),
            product_id,
            name: draft.name,
            rating: draft.rating,
            comment: draft.comment,
            date,
        }
    }
}

/// Review submission body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A review submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: Rating,
    pub comment: String,
}

impl NewReview {
    /// Check required fields and the rating range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReviewError`] found, checking name, then rating,
    /// then comment.
    pub fn validate(self) -> Result<ReviewDraft, ReviewError> {
        let name = required_text(self.name).ok_or(ReviewError::MissingName)?;
        let rating = Rating::try_from(self.rating.ok_or(ReviewError::MissingRating)?)?;
        let comment = required_text(self.comment).ok_or(ReviewError::MissingComment)?;

        Ok(ReviewDraft {
            name,
            rating,
            comment,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(name: &str, rating: i64, comment: &str) -> NewReview {
        NewReview {
            name: Some(name.to_string()),
            rating: Some(rating),
            comment: Some(comment.to_string()),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let draft = submission("  Maya ", 5, " Lasts all day.\n").validate().unwrap();
        assert_eq!(draft.name, "Maya");
        assert_eq!(draft.comment, "Lasts all day.");
        assert_eq!(draft.rating.stars(), 5);
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        assert_eq!(
            submission("   ", 4, "Nice").validate(),
            Err(ReviewError::MissingName)
        );
        assert_eq!(
            submission("Maya", 4, "").validate(),
            Err(ReviewError::MissingComment)
        );
        assert_eq!(
            NewReview::default().validate(),
            Err(ReviewError::MissingName)
        );
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        assert!(matches!(
            submission("Maya", 0, "Nice").validate(),
            Err(ReviewError::Rating(_))
        ));
        assert!(matches!(
            submission("Maya", 6, "Nice").validate(),
            Err(ReviewError::Rating(_))
        ));

        let missing = NewReview {
            rating: None,
            ..submission("Maya", 1, "Nice")
        };
        assert_eq!(missing.validate(), Err(ReviewError::MissingRating));
    }

    #[test]
    fn test_review_wire_format() {
        let draft = submission("Maya", 4, "Warm and spicy").validate().unwrap();
        let date = DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let review = Review::new(ProductId::from("4"), draft, date);

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["productId"], "4");
        assert_eq!(json["rating"], 4);
        assert_eq!(json["date"], "2026-03-01T12:00:00Z");
        assert!(json["id"].is_string());
    }
}
