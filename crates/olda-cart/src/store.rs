//! The cart state container.

use std::fmt;
use std::sync::Arc;

use crate::item::{decode_items, encode_items};
use crate::storage::DurableSink;
use crate::{CartConfig, CartError, CartItem};

/// How much of the cart survived the last write to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// The whole cart was written.
    Full,
    /// The cart was written with logo URLs removed.
    Stripped,
    /// Nothing was written; the cart only lives in memory.
    Volatile,
}

/// Authoritative in-memory cart with a best-effort durable copy.
///
/// Items keep insertion order. Ids are not required to be unique: `remove`
/// and `update` act on every matching item.
pub struct CartStore {
    items: Vec<CartItem>,
    sink: Arc<dyn DurableSink>,
    config: CartConfig,
    durability: Durability,
}

impl CartStore {
    /// Load the cart from `sink`.
    ///
    /// A missing key, an unreadable sink or a corrupt value all yield an
    /// empty cart. The loaded cart is written back straight away, so a
    /// corrupt value is replaced.
    pub fn load(sink: Arc<dyn DurableSink>, config: CartConfig) -> Self {
        let items = read_items(sink.as_ref(), &config.storage_key);
        let mut store = Self {
            items,
            sink,
            config,
            durability: Durability::Full,
        };
        store.persist();
        store
    }

    /// Load the cart under the default configuration.
    pub fn open(sink: Arc<dyn DurableSink>) -> Self {
        Self::load(sink, CartConfig::default())
    }

    /// Append an item.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
        self.persist();
    }

    /// Remove every item with the given id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    /// Replace, in place, every item with the given id.
    ///
    /// `updated` may carry a different id.
    pub fn update(&mut self, id: &str, updated: CartItem) {
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            *item = updated.clone();
        }
        self.persist();
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of the line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::total).sum()
    }

    /// Current items in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// First item with the given id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Outcome of the most recent write.
    pub fn durability(&self) -> Durability {
        self.durability
    }

    /// Active configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Write the cart, falling back to a logo-stripped copy.
    fn persist(&mut self) {
        let key = self.config.storage_key.as_str();

        let full_error = match self.write_items(&self.items) {
            Ok(()) => {
                self.durability = Durability::Full;
                return;
            }
            Err(e) => e,
        };

        if !self.config.strip_logos_on_failure {
            tracing::warn!(key, error = %full_error, "cart storage failed, keeping cart in memory only");
            self.durability = Durability::Volatile;
            return;
        }

        let stripped: Vec<CartItem> = self.items.iter().map(CartItem::stripped).collect();
        self.durability = match self.write_items(&stripped) {
            Ok(()) => {
                tracing::debug!(
                    key,
                    items = stripped.len(),
                    error = %full_error,
                    "cart saved without logo images"
                );
                Durability::Stripped
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cart storage full, keeping cart in memory only");
                Durability::Volatile
            }
        };
    }

    fn write_items(&self, items: &[CartItem]) -> Result<(), CartError> {
        let json = encode_items(items)?;
        self.sink.write(&self.config.storage_key, &json)?;
        Ok(())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("durability", &self.durability)
            .finish_non_exhaustive()
    }
}

fn read_items(sink: &dyn DurableSink, key: &str) -> Vec<CartItem> {
    let json = match sink.read(key) {
        Ok(Some(json)) => json,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "cart storage unreadable, starting empty");
            return Vec::new();
        }
    };

    decode_items(&json).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "stored cart is corrupt, starting empty");
        Vec::new()
    })
}
