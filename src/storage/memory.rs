use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::KeyValueStore;
use crate::errors::{LedgerError, Result};

/// In-process store. Clones share the same entries.
///
/// An optional byte quota (keys plus values) emulates a browser-style storage limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Seeds a raw value, bypassing the quota.
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| LedgerError::Storage("memory store lock poisoned".into()))?;
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(LedgerError::QuotaExceeded { needed, limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").as_deref(), Some("v"));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn quota_rejects_oversized_writes_and_keeps_previous_value() {
        let store = MemoryStore::with_quota(8);
        store.set("k", "1234").unwrap();
        let err = store.set("k", "123456789").unwrap_err();
        assert!(matches!(err, LedgerError::QuotaExceeded { limit: 8, .. }));
        assert_eq!(store.get("k").as_deref(), Some("1234"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert!(MemoryStore::new().get("absent").is_none());
    }
}
