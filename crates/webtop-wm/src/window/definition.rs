use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::types::WindowId;

/// Static description of a window the desktop can open
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowDefinition {
    /// Stable identifier
    pub id: WindowId,
    /// Title shown in the title bar and dock
    pub title: String,
    /// Geometry used the first time the window opens. When absent the
    /// surface's current bounds for the element are used instead.
    #[serde(default)]
    pub default_geometry: Option<Rect>,
    /// Opening the window traps keyboard focus inside it
    #[serde(default)]
    pub modal: bool,
}

impl WindowDefinition {
    /// Create a non-modal definition without a default geometry
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            default_geometry: None,
            modal: false,
        }
    }

    /// Set the default geometry
    pub fn with_geometry(mut self, geometry: Rect) -> Self {
        self.default_geometry = Some(geometry);
        self
    }

    /// Mark as modal
    pub fn modal(mut self) -> Self {
        self.modal = true;
        self
    }
}
