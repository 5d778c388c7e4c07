//! Shopping cart state container.
//!
//! The cart lives entirely on the client. Every mutation is expressed as a
//! [`CartAction`] applied to an immutable [`Cart`] snapshot, producing the next
//! snapshot:
//!
//! ```
//! use aroma_core::{Cart, CartAction, CartItem, Price, ProductId};
//!
//! let item = CartItem {
//!     product_id: ProductId::from("5"),
//!     name: "Citrus Burst".to_string(),
//!     price: Price::from_units(125),
//!     image: "citrus.jpg".to_string(),
//!     size: "50ml".to_string(),
//! };
//!
//! let cart = Cart::default()
//!     .apply(CartAction::Add(item.clone()))
//!     .apply(CartAction::Add(item));
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Price::from_units(250));
//! ```
//!
//! Totals are always recomputed from the current lines; nothing is cached.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// Sales tax applied to the cart subtotal in the order summary (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Product details captured at the moment an item is added to the cart.
///
/// The cart never reads the catalog again, so later price changes do not
/// affect items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub size: String,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.images.first().unwrap_or(&product.image).clone(),
            size: product.size.clone(),
        }
    }
}

/// One product in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity.get())
    }
}

/// A cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit, creating the line if needed.
    Add(CartItem),
    /// Set a line's quantity exactly; zero or less removes the line.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Remove a line if present.
    Remove(ProductId),
    /// Remove every line.
    Clear,
}

/// Cart totals as shown at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    /// Shipping is free on every order.
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

/// An immutable cart snapshot. Lines keep the order they were first added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Apply an action and return the resulting cart.
    #[must_use]
    pub fn apply(&self, action: CartAction) -> Self {
        let mut lines = self.lines.clone();

        match action {
            CartAction::Add(item) => {
                if let Some(line) = lines
                    .iter_mut()
                    .find(|line| line.item.product_id == item.product_id)
                {
                    line.quantity = line.quantity.saturating_add(1);
                } else {
                    lines.push(CartLine {
                        item,
                        quantity: NonZeroU32::MIN,
                    });
                }
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => match NonZeroU32::new(u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)) {
                Some(quantity) => {
                    if let Some(line) = lines
                        .iter_mut()
                        .find(|line| line.item.product_id == product_id)
                    {
                        line.quantity = quantity;
                    }
                }
                None => lines.retain(|line| line.item.product_id != product_id),
            },
            CartAction::Remove(product_id) => {
                lines.retain(|line| line.item.product_id != product_id);
            }
            CartAction::Clear => lines.clear(),
        }

        Self { lines }
    }

    /// Shorthand for adding one unit of a catalog product.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        self.apply(CartAction::Add(CartItem::from(product)))
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find the line for a product.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| &line.item.product_id == product_id)
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity.get()))
    }

    /// Subtotal, free shipping, tax at [`TAX_RATE`] and grand total.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        let subtotal = self.total();
        let tax = subtotal.scaled(TAX_RATE);
        OrderSummary {
            subtotal,
            shipping: Price::ZERO,
            tax,
            total: subtotal + tax,
        }
    }
}
