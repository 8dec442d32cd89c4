//! Cart error types.

use thiserror::Error;

/// Errors raised by a durable sink.
///
/// The cart store recovers from all of these locally; they only reach
/// callers that talk to a sink directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The value does not fit in the remaining storage capacity.
    #[error("Storage quota exceeded: needed {needed} bytes, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// Storage is disabled or cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to read a stored value.
    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    /// Failed to write a value.
    #[error("Storage write failed: {0}")]
    WriteFailed(String),
}

/// Errors that can occur when working with the cart.
#[derive(Error, Debug)]
pub enum CartError {
    /// The cart was requested outside of a cart provider.
    #[error("use_cart must be used within CartProvider")]
    MissingProvider,

    /// Durable storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A line total that JSON cannot represent.
    #[error("Line {0} has a non-finite total")]
    NonFiniteTotal(String),

    /// Failed to encode or decode cart data.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
