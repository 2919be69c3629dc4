//! Durable key-value persistence for the ledger aggregate.

pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// String-keyed storage read once at start-up and written after every mutation.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
