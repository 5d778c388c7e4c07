//! Aroma Bills Core - Shared catalog and cart types.
//!
//! This crate provides the domain types used across all Aroma Bills components:
//! - `storefront` - JSON API over the catalog, reviews and contact form
//! - `cli` - Offline catalog inspection
//! - browser or native clients that hold a shopping cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no locking,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere,
//! including inside a client that never talks to the server for cart updates.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, ratings, emails, facets and
//!   the [`Product`] record
//! - [`cart`] - The shopping cart state container and order summary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartAction, CartItem, CartLine, OrderSummary};
pub use types::*;
