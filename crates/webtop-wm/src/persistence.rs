//! Geometry persistence adapter
//!
//! One record per `(window id, device class)` under
//! `"{namespace}:{window_id}:{device_class}"`, holding
//! `{"top":..,"left":..,"width":..,"height":..}`.
//!
//! Persistence is best-effort. Store failures are logged and swallowed: the
//! in-memory geometry stays authoritative for the session, and the worst
//! case is a window opening at its default position next time.

use std::fmt;

use serde::{Deserialize, Serialize};
use webtop_store::KeyValueStore;

use crate::device::DeviceClass;
use crate::math::Rect;

/// A coordinate as found in storage: a number, or a numeric string such as
/// `"120"` or `"120px"` written by older front-ends.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum StoredCoord {
    Number(f64),
    Text(String),
}

impl StoredCoord {
    fn value(&self) -> Option<f64> {
        let v = match self {
            StoredCoord::Number(n) => *n,
            StoredCoord::Text(s) => {
                let s = s.trim();
                s.strip_suffix("px").unwrap_or(s).trim().parse().ok()?
            }
        };
        v.is_finite().then_some(v)
    }
}

#[derive(Clone, Debug, Deserialize)]
struct StoredRecord {
    top: StoredCoord,
    left: StoredCoord,
    width: StoredCoord,
    height: StoredCoord,
}

impl StoredRecord {
    fn to_rect(&self) -> Option<Rect> {
        Some(Rect::new(
            self.top.value()?,
            self.left.value()?,
            self.width.value()?,
            self.height.value()?,
        ))
    }
}

#[derive(Serialize)]
struct RecordOut {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

/// Persisted geometry store
pub struct GeometryStore {
    store: Box<dyn KeyValueStore>,
    namespace: String,
}

impl fmt::Debug for GeometryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl GeometryStore {
    /// Wrap a key-value store
    pub fn new(store: impl KeyValueStore + 'static, namespace: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            namespace: namespace.into(),
        }
    }

    /// Storage key for a record
    pub fn key(&self, window_id: &str, class: DeviceClass) -> String {
        format!("{}:{}:{}", self.namespace, window_id, class.id())
    }

    /// Persist geometry. Failures are logged; returns whether the write landed.
    pub fn save(&self, window_id: &str, class: DeviceClass, geometry: Rect) -> bool {
        if !geometry.is_finite() {
            tracing::warn!(window = window_id, ?geometry, "refusing to persist non-finite geometry");
            return false;
        }

        let record = RecordOut {
            top: geometry.top,
            left: geometry.left,
            width: geometry.width,
            height: geometry.height,
        };
        let value = match serde_json::to_string(&record) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(window = window_id, error = %e, "failed to encode geometry");
                return false;
            }
        };

        let key = self.key(window_id, class);
        match self.store.set(&key, &value) {
            Ok(()) => {
                tracing::debug!(key = %key, "persisted geometry");
                true
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to persist geometry");
                false
            }
        }
    }

    /// Load geometry. Missing, unreadable or malformed records yield `None`.
    pub fn load(&self, window_id: &str, class: DeviceClass) -> Option<Rect> {
        let key = self.key(window_id, class);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read geometry");
                return None;
            }
        };

        let rect = serde_json::from_str::<StoredRecord>(&raw)
            .ok()
            .and_then(|record| record.to_rect());
        if rect.is_none() {
            tracing::warn!(key = %key, "ignoring malformed geometry record");
        }
        rect
    }

    /// Remove a record. Failures are logged.
    pub fn forget(&self, window_id: &str, class: DeviceClass) {
        let key = self.key(window_id, class);
        if let Err(e) = self.store.remove(&key) {
            tracing::warn!(key = %key, error = %e, "failed to remove geometry");
        }
    }

    /// Remove every record under this namespace. Returns how many were removed.
    pub fn forget_all(&self) -> usize {
        let prefix = format!("{}:", self.namespace);
        let keys = match self.store.keys_with_prefix(&prefix) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "failed to list geometry records");
                return 0;
            }
        };
        keys.iter()
            .filter(|key| match self.store.remove(key) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "failed to remove geometry");
                    false
                }
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use webtop_store::MemoryStore;

    fn store() -> (Rc<MemoryStore>, GeometryStore) {
        let backing = Rc::new(MemoryStore::new());
        let geometry = GeometryStore::new(Rc::clone(&backing), "wm");
        (backing, geometry)
    }

    #[test]
    fn test_key_format() {
        let (_, geometry) = store();
        assert_eq!(geometry.key("about", DeviceClass::Wide), "wm:about:wide");
    }

    #[test]
    fn test_save_writes_json_numbers() {
        let (backing, geometry) = store();
        assert!(geometry.save("about", DeviceClass::Wide, Rect::new(10.0, 20.0, 400.0, 300.0)));

        let raw = backing.get("wm:about:wide").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "top": 10.0, "left": 20.0, "width": 400.0, "height": 300.0 })
        );
        assert_eq!(
            geometry.load("about", DeviceClass::Wide),
            Some(Rect::new(10.0, 20.0, 400.0, 300.0))
        );
    }

    #[test]
    fn test_device_classes_are_partitioned() {
        let (_, geometry) = store();
        geometry.save("about", DeviceClass::Narrow, Rect::new(0.0, 0.0, 300.0, 400.0));
        assert_eq!(geometry.load("about", DeviceClass::Wide), None);
        assert!(geometry.load("about", DeviceClass::Narrow).is_some());
    }

    #[test]
    fn test_load_accepts_string_fields() {
        let (backing, geometry) = store();
        backing
            .set(
                "wm:about:wide",
                r#"{"top":"12px","left":"30","width":" 420px ","height":310}"#,
            )
            .unwrap();
        assert_eq!(
            geometry.load("about", DeviceClass::Wide),
            Some(Rect::new(12.0, 30.0, 420.0, 310.0))
        );
    }

    #[test]
    fn test_load_rejects_malformed() {
        let (backing, geometry) = store();
        backing.set("wm:a:wide", "not json").unwrap();
        backing.set("wm:b:wide", r#"{"top":1,"left":2}"#).unwrap();
        backing
            .set("wm:c:wide", r#"{"top":"x","left":2,"width":3,"height":4}"#)
            .unwrap();

        assert_eq!(geometry.load("a", DeviceClass::Wide), None);
        assert_eq!(geometry.load("b", DeviceClass::Wide), None);
        assert_eq!(geometry.load("c", DeviceClass::Wide), None);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let geometry = GeometryStore::new(MemoryStore::with_quota(0), "wm");
        assert!(!geometry.save("about", DeviceClass::Wide, Rect::new(0.0, 0.0, 300.0, 200.0)));
        assert_eq!(geometry.load("about", DeviceClass::Wide), None);
    }

    #[test]
    fn test_save_rejects_non_finite() {
        let (backing, geometry) = store();
        assert!(!geometry.save("about", DeviceClass::Wide, Rect::new(f64::NAN, 0.0, 1.0, 1.0)));
        assert!(backing.is_empty());
    }

    #[test]
    fn test_forget() {
        let (backing, geometry) = store();
        geometry.save("about", DeviceClass::Wide, Rect::new(0.0, 0.0, 300.0, 200.0));
        geometry.save("terminal", DeviceClass::Wide, Rect::new(0.0, 0.0, 300.0, 200.0));
        backing.set("theme", "dark").unwrap();

        geometry.forget("about", DeviceClass::Wide);
        assert_eq!(geometry.load("about", DeviceClass::Wide), None);

        assert_eq!(geometry.forget_all(), 1);
        assert_eq!(backing.len(), 1);
    }
}
