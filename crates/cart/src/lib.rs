//! Marketplace Cart - client-side cart state with device-local persistence.
//!
//! Holds the ordered collection of cart line items in memory, writes the full
//! snapshot to a local key-value slot on every mutation, and exposes the cart
//! to UI consumers through a provider-scoped context.
//!
//! # Architecture
//!
//! - [`cart`] - The cart collection and line-item types
//! - [`store`] - [`store::CartStore`]: load + mutators, write-through persistence
//! - [`storage`] - The [`storage::CartStorage`] adapter seam with file-backed
//!   and in-memory implementations
//! - [`provider`] - [`provider::CartProvider`] / [`provider::CartContext`]:
//!   the provider scope consumers go through
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Crate error taxonomy
//!
//! Mutators update the in-memory cart first and persist that same snapshot,
//! so the stored state always equals the observable state after a call
//! settles. Persistence failures are returned to the caller rather than
//! dropped.
//!
//! # Example
//!
//! ```
//! use marketplace_cart::{CartProvider, MemoryStorage, NewCartItem};
//! use marketplace_core::{Price, ProductId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> marketplace_cart::Result<()> {
//! let provider = CartProvider::new(MemoryStorage::new());
//! provider.init().await?;
//!
//! let cart = provider.context()?;
//! cart.add_to_cart(NewCartItem {
//!     id: ProductId::parse("p1").expect("valid id"),
//!     title: "Shirt".to_owned(),
//!     image_url: "https://cdn.example.com/shirt.png".to_owned(),
//!     price: "10".parse::<Price>().expect("valid price"),
//! })
//! .await?;
//!
//! assert_eq!(cart.products().await.len(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod provider;
pub mod storage;
pub mod store;

pub use cart::{Cart, CartItem, NewCartItem};
pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use provider::{CartContext, CartProvider};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CartStore, storage_keys};
