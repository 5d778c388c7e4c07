//! Catalog facets.
//!
//! Each product carries exactly one [`Audience`] and one [`Category`]. Both
//! are closed sets; the wire names match the labels shown to shoppers.

use serde::{Deserialize, Serialize};

/// Error returned when a facet label does not name a known value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {facet}: {value}")]
pub struct ParseFacetError {
    /// Which facet was being parsed.
    pub facet: &'static str,
    /// The rejected label.
    pub value: String,
}

/// Who a fragrance is marketed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Men,
    Women,
    Unisex,
}

impl Audience {
    /// All audiences, in display order.
    pub const ALL: [Self; 3] = [Self::Men, Self::Women, Self::Unisex];

    /// Wire and display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Audience {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|audience| audience.as_str() == s)
            .ok_or_else(|| ParseFacetError {
                facet: "audience",
                value: s.to_owned(),
            })
    }
}

/// Fragrance family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Oriental,
    Floral,
    Aquatic,
    Citrus,
    Woody,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Oriental,
        Self::Floral,
        Self::Aquatic,
        Self::Citrus,
        Self::Woody,
    ];

    /// Wire and display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oriental => "Oriental",
            Self::Floral => "Floral",
            Self::Aquatic => "Aquatic",
            Self::Citrus => "Citrus",
            Self::Woody => "Woody",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseFacetError {
                facet: "category",
                value: s.to_owned(),
            })
    }
}
