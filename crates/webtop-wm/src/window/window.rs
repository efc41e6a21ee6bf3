use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::snap::SnapTarget;
use crate::types::WindowId;

/// Interaction mode of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowMode {
    #[default]
    Closed,
    Normal,
    Dragging,
    Resizing,
    SnappedLeft,
    SnappedRight,
    Maximized,
    Minimized,
}

impl WindowMode {
    /// Visible and stacked: everything except closed and minimized
    pub fn is_open(&self) -> bool {
        !matches!(self, WindowMode::Closed | WindowMode::Minimized)
    }

    /// Geometry is dictated by the snap engine
    pub fn is_snapped(&self) -> bool {
        matches!(
            self,
            WindowMode::SnappedLeft | WindowMode::SnappedRight | WindowMode::Maximized
        )
    }

    /// A drag or resize session owns the geometry
    pub fn is_interacting(&self) -> bool {
        matches!(self, WindowMode::Dragging | WindowMode::Resizing)
    }

    /// Mode a snap target puts a window in
    pub fn for_snap(target: SnapTarget) -> Option<WindowMode> {
        match target {
            SnapTarget::None => None,
            SnapTarget::LeftHalf => Some(WindowMode::SnappedLeft),
            SnapTarget::RightHalf => Some(WindowMode::SnappedRight),
            SnapTarget::Maximize => Some(WindowMode::Maximized),
        }
    }

    /// Snap target matching a snapped mode
    pub fn snap_target(&self) -> SnapTarget {
        match self {
            WindowMode::SnappedLeft => SnapTarget::LeftHalf,
            WindowMode::SnappedRight => SnapTarget::RightHalf,
            WindowMode::Maximized => SnapTarget::Maximize,
            _ => SnapTarget::None,
        }
    }
}

/// A window instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    /// Current geometry; for closed windows, the geometry cached for reopening
    pub geometry: Rect,
    /// Stacking rank, allocated from the manager's monotonic counter
    pub z_index: u64,
    pub mode: WindowMode,
    /// Geometry to return to when leaving snapped, maximized or minimized
    pub restore_geometry: Option<Rect>,
    pub is_modal: bool,
}

impl Window {
    /// Geometry the window will have once back in `normal`
    pub fn normal_geometry(&self) -> Rect {
        if self.mode.is_snapped() || self.mode == WindowMode::Minimized {
            self.restore_geometry.unwrap_or(self.geometry)
        } else {
            self.geometry
        }
    }
}
