//! Key-value store interface.

use std::rc::Rc;

use crate::error::StoreResult;

/// String key-value store.
///
/// Implementations use interior mutability; every method takes `&self`.
pub trait KeyValueStore {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// All keys starting with `prefix`, in unspecified order.
    fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }
}
