//! Cart store: in-memory state with write-through persistence.

use marketplace_core::ProductId;
use tracing::instrument;

use crate::cart::{Cart, CartItem, NewCartItem};
use crate::error::Result;
use crate::storage::CartStorage;

/// Storage keys for persisted state.
pub mod storage_keys {
    /// Key for the persisted cart snapshot.
    pub const CART: &str = "cart";
}

/// Holds the cart and keeps the persisted snapshot in sync with it.
///
/// Every mutator updates the in-memory cart first, then serializes that same
/// cart and writes it under [`storage_keys::CART`]. The persisted state
/// therefore always equals the in-memory state once a call settles; a failed
/// write is surfaced to the caller instead of being dropped.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store with an empty cart.
    ///
    /// Call [`CartStore::load`] before serving consumers to pick up the last
    /// persisted snapshot.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            cart: Cart::empty(),
        }
    }

    /// Load the last persisted snapshot.
    ///
    /// A missing key leaves the cart empty. A malformed payload is logged and
    /// treated as an empty cart rather than failing startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read itself fails.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<()> {
        let Some(payload) = self.storage.read(storage_keys::CART).await? else {
            return Ok(());
        };

        match serde_json::from_str::<Cart>(&payload) {
            Ok(cart) => {
                tracing::debug!(items = cart.len(), "loaded persisted cart");
                self.cart = cart;
            }
            Err(error) => {
                tracing::warn!(%error, "persisted cart is malformed, starting empty");
                self.cart = Cart::empty();
            }
        }

        Ok(())
    }

    /// Add a product to the cart and persist the updated snapshot.
    ///
    /// An existing line item with the same ID gets its quantity incremented;
    /// otherwise the product is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written. The
    /// in-memory update is kept either way; the next successful mutation
    /// re-persists the full snapshot.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub async fn add_to_cart(&mut self, item: NewCartItem) -> Result<()> {
        self.cart.add(item);
        self.persist().await
    }

    /// Increase the quantity of the line item with `id` by one.
    ///
    /// A no-op for an absent ID: the cart is unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    #[instrument(skip(self))]
    pub async fn increment(&mut self, id: &ProductId) -> Result<()> {
        if self.cart.increment(id) {
            self.persist().await
        } else {
            Ok(())
        }
    }

    /// Decrease the quantity of the line item with `id` by one, saturating at
    /// zero. The entry stays in the cart even at quantity 0.
    ///
    /// A no-op for an absent ID: the cart is unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    #[instrument(skip(self))]
    pub async fn decrement(&mut self, id: &ProductId) -> Result<()> {
        if self.cart.decrement(id) {
            self.persist().await
        } else {
            Ok(())
        }
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The cart itself.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Serialize the current cart and write it under the fixed key.
    async fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.cart)?;

        if let Err(error) = self.storage.write(storage_keys::CART, &payload).await {
            tracing::error!(%error, "failed to persist cart snapshot");
            return Err(error.into());
        }

        Ok(())
    }
}
