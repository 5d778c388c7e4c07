//! Domain models for records submitted through the storefront.
//!
//! Each submission type comes in two forms: a loosely typed request body
//! (`New*`) that mirrors what clients send, and a validated draft produced by
//! `validate()`. Stores only accept validated drafts.

pub mod contact;
pub mod review;

pub use contact::{ContactDraft, ContactError, ContactMessage, NewContactMessage};
pub use review::{NewReview, Review, ReviewDraft, ReviewError};

/// Trim a required text field, treating blank input as missing.
fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
