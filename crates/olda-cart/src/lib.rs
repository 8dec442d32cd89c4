//! Client-side shopping cart state for the Olda storefront.
//!
//! Holds the cart line items in memory and mirrors them, best effort, to a
//! durable key-value sink (browser local storage in production). When a full
//! write is rejected, the cart is written again without the embedded logo
//! images; if that fails too the cart stays in memory only.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use olda_cart::prelude::*;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut cart = CartStore::load(sink, CartConfig::default());
//!
//! cart.add(CartItem::new("tee-1", 24.0));
//! cart.add(CartItem::new("hoodie-2", 49.5));
//! assert_eq!(cart.total(), 73.5);
//!
//! cart.remove("tee-1");
//! assert_eq!(cart.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod item;
pub mod storage;
pub mod store;

pub use config::{CartConfig, DEFAULT_STORAGE_KEY};
pub use error::{CartError, StorageError};
pub use item::{decode_items, encode_items, CartItem, Logo, Price};
pub use storage::{DurableSink, MemorySink};
pub use store::{CartStore, Durability};

#[cfg(all(target_arch = "wasm32", feature = "spin"))]
pub use storage::KvSink;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use storage::LocalStorageSink;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::error::{CartError, StorageError};
    pub use crate::item::{CartItem, Logo, Price};
    pub use crate::storage::{DurableSink, MemorySink};
    pub use crate::store::{CartStore, Durability};

    #[cfg(all(target_arch = "wasm32", feature = "spin"))]
    pub use crate::storage::KvSink;
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    pub use crate::storage::LocalStorageSink;
}
