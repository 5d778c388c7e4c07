//! Catalog search, facet filtering and sorting.
//!
//! Filters are independent predicates, so their order does not change the
//! result. Sorting runs once, last, and is stable.

use std::str::FromStr;

use aroma_core::{Audience, Category, Price, Product};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw query string parameters for the catalog listing.
///
/// Everything is optional and kept as text; [`CatalogQuery::from`] decides
/// what counts as "absent". Older storefront frontends send
/// `gender`, `fragranceType` and `sortBy`, which are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogParams {
    pub search: Option<String>,
    #[serde(alias = "gender")]
    pub audience: Option<String>,
    #[serde(alias = "fragranceType")]
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort: Option<String>,
}

/// A facet constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetFilter<T> {
    /// No constraint.
    Any,
    /// Keep only products with exactly this value.
    Only(T),
    /// The requested value names nothing in the facet; keep no products.
    Unmatched,
}

impl<T> Default for FacetFilter<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: FromStr> FacetFilter<T> {
    /// Interpret a facet parameter. Absence, blank input and the `all`
    /// sentinel (any case) disable the filter.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Any,
            Some(value) if value.eq_ignore_ascii_case("all") => Self::Any,
            Some(value) => value.parse().map_or(Self::Unmatched, Self::Only),
        }
    }
}

impl<T: PartialEq> FacetFilter<T> {
    fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == value,
            Self::Unmatched => false,
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Reverse catalog order. Products carry no timestamps, so later
    /// catalog entries stand in for newer ones.
    Newest,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Typed catalog criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Lowercased search term; `None` disables text search.
    pub search: Option<String>,
    pub audience: FacetFilter<Audience>,
    pub category: FacetFilter<Category>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// `None` keeps catalog order.
    pub sort: Option<SortKey>,
}

impl From<CatalogParams> for CatalogQuery {
    fn from(params: CatalogParams) -> Self {
        Self {
            search: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_lowercase),
            audience: FacetFilter::parse(params.audience.as_deref()),
            category: FacetFilter::parse(params.category.as_deref()),
            min_price: parse_bound(params.min_price.as_deref()),
            max_price: parse_bound(params.max_price.as_deref()),
            sort: params
                .sort
                .as_deref()
                .and_then(|key| key.trim().parse().ok()),
        }
    }
}

/// Price bounds are whole currency units; anything else counts as absent.
fn parse_bound(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(Decimal::from)
}

impl CatalogQuery {
    /// Returns `true` if the product passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| product.matches_text(term))
            && self.audience.admits(&product.audience)
            && self.category.admits(&product.category)
            && self.in_price_range(product.price)
    }

    fn in_price_range(&self, price: Price) -> bool {
        let amount = price.amount();
        self.min_price.is_none_or(|min| amount >= min)
            && self.max_price.is_none_or(|max| amount <= max)
    }

    /// Filter then sort a product list.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut selected: Vec<&Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .collect();

        match self.sort {
            Some(SortKey::PriceLow) => selected.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortKey::PriceHigh) => selected.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(SortKey::Rating) => selected.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Some(SortKey::Newest) => selected.reverse(),
            None => {}
        }

        selected
    }
}
