//! Window manager configuration
//!
//! Every field has a default, so a host can pass `{}` or only the values it
//! wants to change:
//!
//! ```rust
//! use webtop_wm::WmConfig;
//!
//! let config = WmConfig::from_json(r#"{ "snap_margin": 32 }"#).unwrap();
//! assert_eq!(config.snap_margin, 32.0);
//! assert_eq!(config.min_window_size.width, 200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{WmError, WmResult};
use crate::math::{Rect, Size};

/// Space reserved by persistent desktop chrome (menu bar, dock)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeInsets {
    /// Pixels reserved at the top edge
    pub top: f64,
    /// Pixels reserved at the bottom edge (dock)
    pub bottom: f64,
}

impl Default for ChromeInsets {
    fn default() -> Self {
        Self {
            top: 0.0,
            bottom: 48.0,
        }
    }
}

/// Viewport widths at which the device class changes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths at or above this are at least `medium`
    pub medium: f64,
    /// Widths at or above this are `wide`
    pub wide: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768.0,
            wide: 1200.0,
        }
    }
}

/// Window manager configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// Smallest allowed window size
    pub min_window_size: Size,
    /// Distance from a viewport edge that activates a snap zone
    pub snap_margin: f64,
    /// Offset between successive cascaded windows, applied to both axes
    pub cascade_step: f64,
    /// Cascade position wraps back to zero after this many windows
    pub cascade_wrap: u32,
    /// Height of the title bar (drag handle)
    pub title_bar_height: f64,
    /// Horizontal pixels of the title bar that must stay on the surface
    pub handle_min_visible: f64,
    /// Persistent chrome excluded from snapping and maximizing
    pub chrome: ChromeInsets,
    /// Device class breakpoints
    pub breakpoints: Breakpoints,
    /// First z-index handed out is `base_z_index + 1`
    pub base_z_index: u64,
    /// Key prefix for persisted geometry
    pub storage_namespace: String,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            min_window_size: Size::new(200.0, 150.0),
            snap_margin: 20.0,
            cascade_step: 30.0,
            cascade_wrap: 8,
            title_bar_height: 32.0,
            handle_min_visible: 64.0,
            chrome: ChromeInsets::default(),
            breakpoints: Breakpoints::default(),
            base_z_index: 100,
            storage_namespace: "webtop.wm.v1".to_string(),
        }
    }
}

fn sane(value: f64, floor: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(floor)
    } else {
        fallback
    }
}

impl WmConfig {
    /// Parse a JSON configuration and normalize it.
    pub fn from_json(json: &str) -> WmResult<Self> {
        let config: WmConfig =
            serde_json::from_str(json).map_err(|e| WmError::Config(e.to_string()))?;
        Ok(config.validated())
    }

    /// Replace nonsensical values (non-finite, negative, zero floors,
    /// inverted breakpoints) with the nearest usable ones.
    pub fn validated(mut self) -> Self {
        let defaults = WmConfig::default();

        self.min_window_size = Size::new(
            sane(self.min_window_size.width, 1.0, defaults.min_window_size.width),
            sane(self.min_window_size.height, 1.0, defaults.min_window_size.height),
        );
        self.snap_margin = sane(self.snap_margin, 0.0, defaults.snap_margin);
        self.cascade_step = sane(self.cascade_step, 0.0, defaults.cascade_step);
        self.cascade_wrap = self.cascade_wrap.max(1);
        self.title_bar_height = sane(self.title_bar_height, 0.0, defaults.title_bar_height);
        self.handle_min_visible =
            sane(self.handle_min_visible, 0.0, defaults.handle_min_visible);
        self.chrome.top = sane(self.chrome.top, 0.0, defaults.chrome.top);
        self.chrome.bottom = sane(self.chrome.bottom, 0.0, defaults.chrome.bottom);
        self.breakpoints.medium = sane(self.breakpoints.medium, 0.0, defaults.breakpoints.medium);
        self.breakpoints.wide = sane(self.breakpoints.wide, 0.0, defaults.breakpoints.wide);
        if self.breakpoints.medium > self.breakpoints.wide {
            tracing::warn!(
                medium = self.breakpoints.medium,
                wide = self.breakpoints.wide,
                "breakpoints inverted, swapping"
            );
            std::mem::swap(&mut self.breakpoints.medium, &mut self.breakpoints.wide);
        }
        if self.storage_namespace.is_empty() {
            self.storage_namespace = defaults.storage_namespace;
        }
        self
    }

    /// Part of the viewport windows may occupy: everything except chrome.
    pub fn usable_area(&self, viewport: Size) -> Rect {
        let top = self.chrome.top.min(viewport.height.max(0.0));
        let height = (viewport.height - self.chrome.top - self.chrome.bottom).max(0.0);
        Rect::new(top, 0.0, viewport.width.max(0.0), height)
    }
}
