//! Browser `localStorage` backend.
//!
//! Every browser error is mapped to a [`StoreError`]; quota failures surface
//! as `Backend` because the DOM exception carries no byte counts.

use wasm_bindgen::JsValue;

use crate::error::{StoreError, StoreResult};
use crate::store::KeyValueStore;

/// Store backed by `window.localStorage`.
#[derive(Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl LocalStorage {
    /// Open the page's `localStorage`.
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::unavailable("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::unavailable(describe(e)))?
            .ok_or_else(|| StoreError::unavailable("localStorage disabled"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::backend(describe(e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| {
            tracing::debug!(key, "localStorage.setItem rejected");
            StoreError::backend(describe(e))
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::backend(describe(e)))
    }

    fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let len = self
            .storage
            .length()
            .map_err(|e| StoreError::backend(describe(e)))?;
        let mut keys = Vec::new();
        for index in 0..len {
            let key = self
                .storage
                .key(index)
                .map_err(|e| StoreError::backend(describe(e)))?;
            if let Some(key) = key.filter(|k| k.starts_with(prefix)) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
