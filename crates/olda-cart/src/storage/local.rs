//! Browser `localStorage` sink.

use crate::storage::DurableSink;
use crate::StorageError;

/// Durable sink over `window.localStorage`.
///
/// Holds no handle; the storage object is looked up on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSink;

impl LocalStorageSink {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl DurableSink for LocalStorageSink {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed(format!("{:?}", e)))
    }

    // Browsers reject with a QuotaExceededError DOMException when full.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}
