//! Cart management commands.
//!
//! Each command opens the store against the configured data directory, loads
//! the persisted snapshot, performs one operation, and exits. Mutations are
//! persisted by the store itself.

#![allow(clippy::print_stdout)]

use marketplace_cart::{CartConfig, CartStore, FileStorage, NewCartItem};
use marketplace_core::{Price, ProductId};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Open the store over the configured data directory and load the snapshot.
async fn open_store() -> Result<CartStore<FileStorage>> {
    let config = CartConfig::from_env()?;
    let mut store = CartStore::new(FileStorage::new(config.data_dir));
    store.load().await?;
    Ok(store)
}

/// Print the cart contents and subtotal.
pub async fn show() -> Result<()> {
    let store = open_store().await?;

    if store.products().is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for item in store.products() {
        println!(
            "{:<12} x{:<3} {}  {}",
            item.id.as_str(),
            item.quantity,
            item.price,
            item.title
        );
    }
    println!("subtotal: {}", store.cart().subtotal());

    Ok(())
}

/// Add a product to the cart.
pub async fn add(id: &str, title: String, image_url: String, price: &str) -> Result<()> {
    let id = ProductId::parse(id)?;
    let price: Price = price.parse()?;

    let mut store = open_store().await?;
    store
        .add_to_cart(NewCartItem {
            id: id.clone(),
            title,
            image_url,
            price,
        })
        .await?;

    tracing::info!(%id, "added to cart");
    Ok(())
}

/// Increase a product's quantity by one.
pub async fn increment(id: &str) -> Result<()> {
    let id = ProductId::parse(id)?;
    let mut store = open_store().await?;

    if store.cart().get(&id).is_none() {
        tracing::warn!(%id, "product not in cart, nothing to do");
        return Ok(());
    }

    store.increment(&id).await?;
    tracing::info!(%id, "quantity incremented");
    Ok(())
}

/// Decrease a product's quantity by one.
pub async fn decrement(id: &str) -> Result<()> {
    let id = ProductId::parse(id)?;
    let mut store = open_store().await?;

    if store.cart().get(&id).is_none() {
        tracing::warn!(%id, "product not in cart, nothing to do");
        return Ok(());
    }

    store.decrement(&id).await?;
    tracing::info!(%id, "quantity decremented");
    Ok(())
}
