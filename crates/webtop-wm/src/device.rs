//! Device classes
//!
//! A coarse viewport-width category. It partitions persisted geometry so a
//! layout saved on a phone is never restored on a desktop monitor (and vice
//! versa). It is recomputed on every viewport resize and never stored on a
//! window.

use serde::{Deserialize, Serialize};

use crate::config::Breakpoints;

/// Coarse viewport-width category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Phones and narrow windows
    Narrow,
    /// Tablets and small laptops
    Medium,
    /// Desktop monitors
    #[default]
    Wide,
}

impl DeviceClass {
    /// Classify a viewport width.
    pub fn classify(width: f64, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.medium {
            DeviceClass::Narrow
        } else if width < breakpoints.wide {
            DeviceClass::Medium
        } else {
            DeviceClass::Wide
        }
    }

    /// Get the string ID used in storage keys
    pub fn id(&self) -> &'static str {
        match self {
            DeviceClass::Narrow => "narrow",
            DeviceClass::Medium => "medium",
            DeviceClass::Wide => "wide",
        }
    }

    /// Parse from string ID (e.g., "narrow", "medium", "wide")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "narrow" => Some(DeviceClass::Narrow),
            "medium" => Some(DeviceClass::Medium),
            "wide" => Some(DeviceClass::Wide),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
