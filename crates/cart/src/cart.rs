//! Cart collection and line-item types.

use marketplace_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product's presence in the cart.
///
/// Field names match the persisted JSON format: `id`, `title`, `image_url`,
/// `price`, `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier of the underlying product. Immutable once added.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Number of units, at least 1 on entry into the cart.
    pub quantity: u32,
}

/// A product descriptor without a quantity, as handed over by product pages.
///
/// Consumed by [`Cart::add`] to construct a fresh [`CartItem`]; the caller's
/// value is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Unique identifier of the underlying product.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewCartItem {
    /// Build the cart entry for this descriptor with quantity 1.
    #[must_use]
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

/// The ordered, id-unique collection of cart line items.
///
/// Serializes transparently as a JSON array of [`CartItem`], which is exactly
/// the persisted snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price times quantity across all line items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price.line_total(item.quantity))
            .sum()
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same ID already exists its quantity goes up by
    /// one and no new entry is created; otherwise the product is appended with
    /// quantity 1. ID uniqueness holds across the whole cart at all times.
    pub fn add(&mut self, item: NewCartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(item.into_item());
        }
    }

    /// Increase the quantity of the line item with `id` by one.
    ///
    /// Returns `false` (and leaves the cart unchanged) if no such item exists.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrease the quantity of the line item with `id` by one, saturating at
    /// zero. The entry stays in the cart even at quantity 0; there is no
    /// removal path.
    ///
    /// Returns `false` (and leaves the cart unchanged) if no such item exists.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_sub(1);
                true
            }
            None => false,
        }
    }
}
