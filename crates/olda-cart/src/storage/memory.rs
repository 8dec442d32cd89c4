//! In-process sink with an optional byte quota.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::storage::DurableSink;
use crate::StorageError;

/// In-memory durable sink.
///
/// Used off the browser and in tests. A quota, counted as the bytes of all
/// keys and values, makes oversized writes fail the way a full browser
/// storage does.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryState {
    fn used_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn check_enabled(&self) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }
}

impl MemorySink {
    /// Create an unbounded sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink holding at most `bytes` bytes of keys and values.
    pub fn with_quota(bytes: usize) -> Self {
        let sink = Self::default();
        sink.set_quota(Some(bytes));
        sink
    }

    /// Change the quota. Existing entries are kept even if they exceed it.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.lock().quota = bytes;
    }

    /// Make every operation fail, as when storage is turned off.
    pub fn set_disabled(&self, disabled: bool) {
        self.lock().disabled = disabled;
    }

    /// Store a raw value, bypassing quota and the disabled flag.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().entries.insert(key.into(), value.into());
    }

    /// Raw value under `key`, bypassing the disabled flag.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Bytes currently stored.
    pub fn used_bytes(&self) -> usize {
        let state = self.lock();
        state.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // No method panics mid-update, so a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DurableSink for MemorySink {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.lock();
        state.check_enabled()?;
        Ok(state.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.lock();
        state.check_enabled()?;

        if let Some(quota) = state.quota {
            let available = quota.saturating_sub(state.used_excluding(key));
            let needed = key.len() + value.len();
            if needed > available {
                return Err(StorageError::QuotaExceeded { needed, available });
            }
        }

        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
