//! In-memory key-value store.
//!
//! Provides a `BTreeMap`-based store that doesn't outlive the process.
//! Used by tests and by hosts without durable storage. An optional quota
//! reproduces the "quota exceeded" failures browsers raise on full storage.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};
use crate::store::KeyValueStore;

/// Default quota (5 MB, the common browser `localStorage` limit).
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Storage usage statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreUsage {
    /// Bytes held by keys and values
    pub used_bytes: u64,
    /// Number of stored entries
    pub entry_count: u64,
    /// Quota in bytes, if any
    pub max_bytes: Option<u64>,
}

impl StoreUsage {
    /// Remaining bytes before the quota is hit (`None` when unbounded).
    pub fn remaining(&self) -> Option<u64> {
        self.max_bytes
            .map(|max| max.saturating_sub(self.used_bytes))
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    max_bytes: Option<u64>,
}

fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}

impl MemoryStore {
    /// Create a new unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes past `max_bytes`.
    pub fn with_quota(max_bytes: u64) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            max_bytes: Some(max_bytes),
        }
    }

    /// Current usage.
    pub fn usage(&self) -> StoreUsage {
        let entries = self.entries.borrow();
        StoreUsage {
            used_bytes: entries.iter().map(|(k, v)| entry_size(k, v)).sum(),
            entry_count: entries.len() as u64,
            max_bytes: self.max_bytes,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(max) = self.max_bytes {
            let usage = self.usage();
            let replaced = self
                .entries
                .borrow()
                .get(key)
                .map(|old| entry_size(key, old))
                .unwrap_or(0);
            let needed = entry_size(key, value);
            let available = max.saturating_sub(usage.used_bytes - replaced);
            if needed > available {
                return Err(StoreError::QuotaExceeded { needed, available });
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .entries
            .borrow()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert!(store.is_empty());

        // Removing a missing key is fine
        store.remove("a").unwrap();
    }

    #[test]
    fn test_keys_with_prefix() {
        let store = MemoryStore::new();
        store.set("wm:about:wide", "x").unwrap();
        store.set("wm:terminal:wide", "y").unwrap();
        store.set("theme", "dark").unwrap();

        let mut keys = store.keys_with_prefix("wm:").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["wm:about:wide", "wm:terminal:wide"]);
    }

    #[test]
    fn test_quota_exceeded() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap(); // 6 bytes

        let err = store.set("j", "123456").unwrap_err(); // 7 bytes, 4 free
        assert_eq!(
            err,
            StoreError::QuotaExceeded {
                needed: 7,
                available: 4
            }
        );
        assert_eq!(store.get("j").unwrap(), None);
    }

    #[test]
    fn test_quota_counts_replaced_value() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap(); // 10 bytes, full

        // Overwriting the same key frees the old value first
        store.set("k", "987654321").unwrap();
        assert_eq!(store.usage().used_bytes, 10);
        assert_eq!(store.usage().remaining(), Some(0));
    }

    #[test]
    fn test_zero_quota_rejects_everything() {
        let store = MemoryStore::with_quota(0);
        assert!(matches!(
            store.set("k", "v"),
            Err(StoreError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_shared_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let handle: Rc<MemoryStore> = Rc::clone(&store);

        handle.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_usage() {
        let store = MemoryStore::new();
        store.set("ab", "cde").unwrap();
        store.set("f", "g").unwrap();

        let usage = store.usage();
        assert_eq!(usage.used_bytes, 7);
        assert_eq!(usage.entry_count, 2);
        assert_eq!(usage.remaining(), None);
    }
}
