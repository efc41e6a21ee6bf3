use crate::bounds::clamp_to_area;
use crate::events::WmEvent;
use crate::snap::{self, SnapTarget};
use crate::surface::Surface;
use crate::window::WindowMode;

use super::WindowManager;

impl<S: Surface> WindowManager<S> {
    /// Snap a window to `target`, or back to normal if it is already there.
    ///
    /// Valid from normal, snapped and maximized. Narrow viewports turn the
    /// half targets into maximize.
    pub fn toggle_snap(&mut self, id: &str, target: SnapTarget) {
        let target = snap::effective_target(target, self.viewport, &self.config);
        let Some(target_mode) = WindowMode::for_snap(target) else {
            return;
        };
        let Some(rect) = snap::compute_geometry(target, self.viewport, &self.config) else {
            return;
        };
        let area = self.area();

        let Some(window) = self.windows.get_mut(id) else {
            tracing::debug!(window = id, "snap: unknown window");
            return;
        };
        let event = match window.mode {
            mode if mode == target_mode => {
                let restore = window.restore_geometry.take().unwrap_or(window.geometry);
                window.geometry = clamp_to_area(restore, area, &self.config);
                window.mode = WindowMode::Normal;
                WmEvent::Unsnapped { id: id.to_string() }
            }
            WindowMode::Normal => {
                window.restore_geometry = Some(window.geometry);
                window.geometry = rect;
                window.mode = target_mode;
                WmEvent::Snapped {
                    id: id.to_string(),
                    target,
                }
            }
            WindowMode::SnappedLeft | WindowMode::SnappedRight | WindowMode::Maximized => {
                window.geometry = rect;
                window.mode = target_mode;
                WmEvent::Snapped {
                    id: id.to_string(),
                    target,
                }
            }
            mode => {
                tracing::debug!(window = id, ?mode, "snap: invalid state");
                return;
            }
        };
        tracing::debug!(window = id, ?target, mode = ?window.mode, "snap toggled");

        self.sync_surface(id);
        self.publish(event);
    }
}
