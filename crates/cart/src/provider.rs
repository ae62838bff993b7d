//! Provider scope for the cart.
//!
//! The provider owns the [`CartStore`] for the lifetime of the hosting
//! process. UI consumers never touch the store directly: they ask the
//! provider for a [`CartContext`], a cheaply-cloneable handle exposing the
//! cart and its three mutation operations. Asking for a context before the
//! provider has been initialized fails synchronously with
//! [`CartError::ContextNotInitialized`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use marketplace_core::ProductId;

use crate::cart::{CartItem, NewCartItem};
use crate::error::{CartError, Result};
use crate::storage::CartStorage;
use crate::store::CartStore;

/// Owns the cart store and gates access to it behind initialization.
pub struct CartProvider<S> {
    store: Arc<RwLock<CartStore<S>>>,
    initialized: AtomicBool,
}

impl<S: CartStorage> CartProvider<S> {
    /// Create a provider over the given storage adapter.
    ///
    /// The cart starts empty; call [`CartProvider::init`] to load the last
    /// persisted snapshot and open the provider scope.
    pub fn new(storage: S) -> Self {
        Self {
            store: Arc::new(RwLock::new(CartStore::new(storage))),
            initialized: AtomicBool::new(false),
        }
    }

    /// Load the persisted cart and open the provider scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails; the scope stays closed in
    /// that case.
    pub async fn init(&self) -> Result<()> {
        self.store.write().await.load().await?;
        self.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Hand out a consumer-facing context.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ContextNotInitialized`] if called before
    /// [`CartProvider::init`] has completed.
    pub fn context(&self) -> Result<CartContext<S>> {
        if !self.initialized.load(Ordering::Acquire) {
            return Err(CartError::ContextNotInitialized);
        }

        Ok(CartContext {
            store: Arc::clone(&self.store),
        })
    }
}

/// Consumer-facing handle to the cart.
///
/// Exposes the observable product list plus the `add_to_cart`, `increment`
/// and `decrement` operations. Clones share the same underlying cart, so
/// every consumer in the provider scope observes the same state.
pub struct CartContext<S> {
    store: Arc<RwLock<CartStore<S>>>,
}

impl<S> Clone for CartContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CartStorage> CartContext<S> {
    /// Snapshot of the line items currently in the cart, in insertion order.
    pub async fn products(&self) -> Vec<CartItem> {
        self.store.read().await.products().to_vec()
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated snapshot fails.
    pub async fn add_to_cart(&self, item: NewCartItem) -> Result<()> {
        self.store.write().await.add_to_cart(item).await
    }

    /// Increase the quantity of the line item with `id` by one.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated snapshot fails.
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.store.write().await.increment(id).await
    }

    /// Decrease the quantity of the line item with `id` by one, saturating at
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated snapshot fails.
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.store.write().await.decrement(id).await
    }
}
