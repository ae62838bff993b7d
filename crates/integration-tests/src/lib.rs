//! Integration tests for Marketplace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Cart mutations through the provider context
//! - `cart_persistence` - File-backed persistence and cross-process round-trips
//!
//! Every test runs against a fresh temporary data directory; nothing touches
//! the real device storage.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use marketplace_cart::{CartProvider, FileStorage};

/// A fresh data directory plus the storage adapter rooted at it.
///
/// The temporary directory lives as long as the context, so files persist
/// across multiple stores within one test.
pub struct TestContext {
    data_dir: tempfile::TempDir,
    pub storage: FileStorage,
}

impl TestContext {
    /// Create a context over a fresh temporary data directory.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("create temp data dir");
        let storage = FileStorage::new(data_dir.path());
        Self { data_dir, storage }
    }

    /// Build and initialize a provider over this context's storage.
    pub async fn provider(&self) -> CartProvider<FileStorage> {
        let provider = CartProvider::new(self.storage.clone());
        provider.init().await.expect("initialize cart provider");
        provider
    }

    /// Path of the persisted cart snapshot file.
    #[must_use]
    pub fn cart_file(&self) -> PathBuf {
        self.data_dir.path().join("cart.json")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
