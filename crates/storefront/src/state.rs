//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::db::{ContactStore, ReviewStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the catalog and the
/// runtime stores for the lifetime of the process; nothing outlives it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    reviews: ReviewStore,
    contacts: ContactStore,
}

impl AppState {
    /// Create application state around an existing catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                reviews: ReviewStore::new(),
                contacts: ContactStore::new(),
            }),
        }
    }

    /// Create application state with the launch catalog and empty stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails validation.
    pub fn seeded(config: StorefrontConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(config, Catalog::seeded()?))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the review store.
    #[must_use]
    pub fn reviews(&self) -> &ReviewStore {
        &self.inner.reviews
    }

    /// Get a reference to the contact message store.
    #[must_use]
    pub fn contacts(&self) -> &ContactStore {
        &self.inner.contacts
    }
}
