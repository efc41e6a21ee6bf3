//! Dock model
//!
//! The dock shows one item per registered window definition and reflects
//! whether the window is closed, open, minimized or focused. Clicking an item
//! goes back through [`WindowManager::dock_click`](crate::WindowManager::dock_click).

use serde::{Deserialize, Serialize};

use crate::types::WindowId;
use crate::window::WindowMode;

/// Indicator shown on a dock item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockState {
    #[default]
    Closed,
    Open,
    Minimized,
    /// Open and focused
    Active,
}

impl DockState {
    /// Indicator for a window mode
    pub fn from_mode(mode: WindowMode, focused: bool) -> Self {
        match mode {
            WindowMode::Closed => DockState::Closed,
            WindowMode::Minimized => DockState::Minimized,
            _ if focused => DockState::Active,
            _ => DockState::Open,
        }
    }
}

/// One dock entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockItem {
    pub id: WindowId,
    pub title: String,
    pub state: DockState,
}
