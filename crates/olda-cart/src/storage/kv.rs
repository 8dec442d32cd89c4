//! Sink backed by Spin's Key-Value Store.

use spin_sdk::key_value::Store;

use crate::storage::DurableSink;
use crate::StorageError;

/// Durable sink for server-rendered storefronts keeping the cart in the
/// edge Key-Value Store.
///
/// The store is opened on each call so the sink stays `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct KvSink {
    store_name: Option<String>,
}

impl KvSink {
    /// Use the default Key-Value store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let sink = KvSink::open_default();
    /// ```
    pub fn open_default() -> Self {
        Self { store_name: None }
    }

    /// Use a named Key-Value store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let sink = KvSink::open("carts");
    /// ```
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            store_name: Some(name.into()),
        }
    }

    fn store(&self) -> Result<Store, StorageError> {
        match &self.store_name {
            Some(name) => Store::open(name),
            None => Store::open_default(),
        }
        .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl DurableSink for KvSink {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.store()?.get(key) {
            Ok(Some(bytes)) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::ReadFailed(e.to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store()?
            .set(key, value.as_bytes())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}
