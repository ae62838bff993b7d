//! Unified error handling for the cart crate.
//!
//! All fallible operations return [`Result`]. The only error a well-behaved
//! consumer should ever trigger is [`CartError::ContextNotInitialized`];
//! everything else reports a persistence problem.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// The consumer accessor was used outside an initialized provider scope.
    #[error("cart context used before the provider was initialized")]
    ContextNotInitialized,

    /// Reading or writing the persisted snapshot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Encoding the cart snapshot failed.
    #[error("failed to encode cart snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::ContextNotInitialized;
        assert_eq!(
            err.to_string(),
            "cart context used before the provider was initialized"
        );

        let err = CartError::Storage(StorageError::Backend("disk full".to_owned()));
        assert_eq!(err.to_string(), "storage error: storage backend error: disk full");
    }

    #[test]
    fn test_storage_error_converts() {
        fn fails() -> Result<()> {
            Err(StorageError::Backend("nope".to_owned()))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(CartError::Storage(_))));
    }
}
