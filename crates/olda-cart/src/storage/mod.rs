//! Durable key-value sinks the cart is mirrored to.

mod memory;

#[cfg(all(target_arch = "wasm32", feature = "spin"))]
mod kv;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;

pub use memory::MemorySink;

#[cfg(all(target_arch = "wasm32", feature = "spin"))]
pub use kv::KvSink;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageSink;

use crate::StorageError;

/// Persistent string storage addressed by key.
///
/// Implementations must be cheap to call repeatedly: the cart writes after
/// every mutation.
pub trait DurableSink: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
