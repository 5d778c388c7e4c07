//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Audience, Category, Price, ProductId};

/// A sellable fragrance.
///
/// Products are immutable once the catalog is seeded. Field names on the wire
/// follow the storefront's JSON contract (`gender`, `fragranceType`,
/// `reviews`), which predates the Rust naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// One-line teaser shown on product cards.
    pub description: String,
    /// Long-form copy shown on the detail page.
    pub full_description: String,
    pub price: Price,
    /// Bottle size label, e.g. "50ml".
    pub size: String,
    #[serde(rename = "gender")]
    pub audience: Audience,
    #[serde(rename = "fragranceType")]
    pub category: Category,
    /// Scent composition, top notes first. Never empty.
    pub notes: Vec<String>,
    /// Primary image URL; always equal to `images[0]`.
    pub image: String,
    pub images: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
    /// Average star rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews the rating is averaged over.
    #[serde(rename = "reviews")]
    pub review_count: u32,
}

impl Product {
    /// Case-insensitive substring match against name, teaser and notes.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .notes
                .iter()
                .any(|note| note.to_lowercase().contains(needle))
    }
}
