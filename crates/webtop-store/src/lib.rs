//! Durable key-value storage for the webtop desktop
//!
//! The window manager persists small records (window geometry) under
//! namespaced string keys. This crate provides the storage seam:
//!
//! - **Trait**: [`KeyValueStore`], string keys to string values
//! - **Memory**: [`MemoryStore`], a `BTreeMap` store with an optional byte quota
//! - **Browser**: `LocalStorage`, backed by `window.localStorage` (feature `wasm`)
//!
//! # Design Principles
//!
//! 1. **Interior mutability**: stores take `&self`, so a single store can be
//!    shared (`Rc<S>`) between the window manager and diagnostics
//! 2. **Absence is not an error**: a missing key is `Ok(None)`
//! 3. **Quota-aware**: writes that would exceed the quota fail with
//!    [`StoreError::QuotaExceeded`], mirroring browser storage behaviour

pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "wasm")]
pub mod local;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryStore, StoreUsage, DEFAULT_QUOTA_BYTES};
pub use store::KeyValueStore;

#[cfg(feature = "wasm")]
pub use local::LocalStorage;
