//! Device-local key-value persistence for the cart.
//!
//! The cart is stored as a single whole-value snapshot under a fixed key, so
//! the adapter surface is a string-payload read/write pair. [`FileStorage`]
//! is the real device-backed implementation; [`MemoryStorage`] is the
//! substitutable in-memory implementation used by tests.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::future::Future;

/// Errors raised by storage adapters.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem-level failure.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A key-value persistence adapter.
///
/// Reads and writes are whole-value: the payload under a key is always
/// replaced in full, never patched. Implementations must tolerate a missing
/// key on read (`Ok(None)`).
pub trait CartStorage: Send + Sync {
    /// Read the raw payload stored under `key`, if any.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite the payload stored under `key`.
    fn write(
        &self,
        key: &str,
        payload: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
