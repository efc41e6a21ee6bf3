use serde::Serialize;

use crate::device::DeviceClass;
use crate::error::{WmError, WmResult};
use crate::input::Session;
use crate::math::Size;
use crate::surface::Surface;
use crate::types::WindowId;
use crate::window::Window;

use super::WindowManager;

/// Diagnostic view of the whole workspace
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkspaceSnapshot {
    /// Every window opened this session, in registration order
    pub windows: Vec<Window>,
    pub focused: Option<WindowId>,
    pub z_counter: u64,
    pub cascade_counter: u32,
    pub device_class: DeviceClass,
    pub viewport: Size,
    pub session: Option<Session>,
}

impl<S: Surface> WindowManager<S> {
    /// Capture the current state
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            windows: self
                .definitions
                .iter()
                .filter_map(|d| self.windows.get(&d.id))
                .cloned()
                .collect(),
            focused: self.focused.clone(),
            z_counter: self.z_counter,
            cascade_counter: self.cascade_counter,
            device_class: self.device_class,
            viewport: self.viewport,
            session: self.session.clone(),
        }
    }

    /// Capture the current state as JSON
    pub fn snapshot_json(&self) -> WmResult<String> {
        serde_json::to_string(&self.snapshot()).map_err(|e| WmError::Serialization(e.to_string()))
    }
}
