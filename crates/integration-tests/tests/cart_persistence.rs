//! Integration tests for file-backed cart persistence.
//!
//! Run with: cargo test -p marketplace-integration-tests

#![allow(clippy::unwrap_used)]

use marketplace_cart::{CartStore, NewCartItem};
use marketplace_core::{Price, ProductId};
use marketplace_integration_tests::TestContext;
use rust_decimal::dec;

fn descriptor(id: &str, price: rust_decimal::Decimal) -> NewCartItem {
    NewCartItem {
        id: ProductId::parse(id).unwrap(),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Price::new(price),
    }
}

fn pid(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}

// ============================================================================
// Snapshot Format Tests
// ============================================================================

#[tokio::test]
async fn test_persisted_file_is_a_json_array_of_items() {
    let ctx = TestContext::new();
    let provider = ctx.provider().await;
    let cart = provider.context().unwrap();

    cart.add_to_cart(descriptor("p1", dec!(19.99)))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(ctx.cart_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = entries.first().unwrap();
    assert_eq!(entry["id"], "p1");
    assert_eq!(entry["title"], "Product p1");
    assert_eq!(entry["image_url"], "https://cdn.example.com/p1.png");
    assert_eq!(entry["price"], 19.99);
    assert_eq!(entry["quantity"], 1);
}

#[tokio::test]
async fn test_every_mutation_rewrites_the_full_snapshot() {
    let ctx = TestContext::new();
    let provider = ctx.provider().await;
    let cart = provider.context().unwrap();

    cart.add_to_cart(descriptor("p1", dec!(10))).await.unwrap();
    cart.add_to_cart(descriptor("p2", dec!(20))).await.unwrap();
    cart.increment(&pid("p1")).await.unwrap();

    let raw = std::fs::read_to_string(ctx.cart_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Whole-snapshot write: both items present, p1 at quantity 2.
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.first().unwrap()["quantity"], 2);
    assert_eq!(entries.get(1).unwrap()["quantity"], 1);
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_roundtrip_across_provider_instances() {
    let ctx = TestContext::new();

    {
        let provider = ctx.provider().await;
        let cart = provider.context().unwrap();
        cart.add_to_cart(descriptor("p1", dec!(10))).await.unwrap();
        cart.add_to_cart(descriptor("p2", dec!(5.25))).await.unwrap();
        cart.increment(&pid("p2")).await.unwrap();
    }

    // A second provider over the same data directory sees the same cart.
    let provider = ctx.provider().await;
    let products = provider.context().unwrap().products().await;

    assert_eq!(products.len(), 2);
    assert_eq!(products.first().unwrap().quantity, 1);
    let second = products.get(1).unwrap();
    assert_eq!(second.id, pid("p2"));
    assert_eq!(second.price, Price::new(dec!(5.25)));
    assert_eq!(second.quantity, 2);
}

#[tokio::test]
async fn test_load_previously_persisted_snapshot_exactly() {
    let ctx = TestContext::new();

    std::fs::create_dir_all(ctx.cart_file().parent().unwrap()).unwrap();
    std::fs::write(
        ctx.cart_file(),
        r#"[{"id":"a","title":"A","image_url":"u","price":3,"quantity":2}]"#,
    )
    .unwrap();

    let provider = ctx.provider().await;
    let products = provider.context().unwrap().products().await;

    assert_eq!(products.len(), 1);
    let item = products.first().unwrap();
    assert_eq!(item.id, pid("a"));
    assert_eq!(item.title, "A");
    assert_eq!(item.image_url, "u");
    assert_eq!(item.price, Price::new(dec!(3)));
    assert_eq!(item.quantity, 2);
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

#[tokio::test]
async fn test_missing_snapshot_starts_empty() {
    let ctx = TestContext::new();
    let provider = ctx.provider().await;

    assert!(provider.context().unwrap().products().await.is_empty());
}

#[tokio::test]
async fn test_malformed_snapshot_falls_back_to_empty() {
    let ctx = TestContext::new();

    std::fs::create_dir_all(ctx.cart_file().parent().unwrap()).unwrap();
    std::fs::write(ctx.cart_file(), "{definitely not a cart").unwrap();

    let provider = ctx.provider().await;
    let cart = provider.context().unwrap();
    assert!(cart.products().await.is_empty());

    // The store recovers: the next mutation persists a clean snapshot.
    cart.add_to_cart(descriptor("p1", dec!(10))).await.unwrap();

    let mut store = CartStore::new(ctx.storage.clone());
    store.load().await.unwrap();
    assert_eq!(store.products().len(), 1);
}
