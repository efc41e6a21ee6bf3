use crate::bounds::clamp_to_area;
use crate::device::DeviceClass;
use crate::events::WmEvent;
use crate::math::Size;
use crate::snap;
use crate::surface::Surface;
use crate::window::WindowMode;

use super::WindowManager;

/// Host-reported sizes can be garbage during page setup.
pub(super) fn sanitize(size: Size) -> Size {
    let dim = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(dim(size.width), dim(size.height))
}

impl<S: Surface> WindowManager<S> {
    /// React to a viewport size change.
    ///
    /// Any active session is cancelled. Normal windows are clamped back onto
    /// the surface, snapped and maximized windows take their rectangle for the
    /// new size, and minimized windows get their restore geometry clamped.
    pub fn viewport_resized(&mut self, size: Size) {
        let size = sanitize(size);
        self.cancel_session();
        self.viewport = size;

        let class = DeviceClass::classify(size.width, &self.config.breakpoints);
        let previous = std::mem::replace(&mut self.device_class, class);
        tracing::debug!(viewport = ?size, %class, "viewport resized");

        let area = self.area();
        let mut snapped = Vec::new();
        for window in self.windows.values_mut() {
            match window.mode {
                WindowMode::Normal => {
                    window.geometry = clamp_to_area(window.geometry, area, &self.config);
                }
                WindowMode::SnappedLeft | WindowMode::SnappedRight | WindowMode::Maximized => {
                    let target = snap::effective_target(window.mode.snap_target(), size, &self.config);
                    if let Some(rect) = snap::compute_geometry(target, size, &self.config) {
                        window.geometry = rect;
                    }
                    if let Some(mode) = WindowMode::for_snap(target) {
                        if mode != window.mode {
                            window.mode = mode;
                            snapped.push((window.id.clone(), target));
                        }
                    }
                    window.restore_geometry = window
                        .restore_geometry
                        .map(|r| clamp_to_area(r, area, &self.config));
                }
                WindowMode::Minimized => {
                    window.restore_geometry = window
                        .restore_geometry
                        .map(|r| clamp_to_area(r, area, &self.config));
                }
                WindowMode::Closed | WindowMode::Dragging | WindowMode::Resizing => {}
            }
        }

        let ids: Vec<_> = self.windows.keys().cloned().collect();
        for id in &ids {
            self.sync_surface(id);
        }

        if previous != class {
            self.publish(WmEvent::DeviceClassChanged {
                from: previous,
                to: class,
            });
        }
        for (id, target) in snapped {
            self.publish(WmEvent::Snapped { id, target });
        }
    }
}
