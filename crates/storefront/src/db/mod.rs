//! In-memory stores for records submitted at runtime.
//!
//! Nothing is persisted: reviews and contact messages live for the lifetime
//! of the process and are lost on restart.
//!
//! ## Stores
//!
//! - [`ReviewStore`] - per-product reviews, most recent first
//! - [`ContactStore`] - contact form messages, in submission order
//!
//! Each store guards its collection with a `std::sync::RwLock`. A lock is
//! held only for a single append or read and never across an `.await`.

mod contacts;
mod reviews;

use thiserror::Error;

pub use contacts::ContactStore;
pub use reviews::ReviewStore;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding the store lock.
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),
}
