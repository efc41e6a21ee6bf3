//! Drag and resize sessions

use crate::events::WmEvent;
use crate::input::{Session, SessionKind};
use crate::math::{Point, Rect};
use crate::snap::{self, SnapTarget};
use crate::surface::Surface;
use crate::window::{ResizeEdge, WindowMode};

use super::WindowManager;

impl<S: Surface> WindowManager<S> {
    /// Start dragging a window by its title bar.
    ///
    /// Returns `false` (and does nothing) for unknown, closed or minimized
    /// windows.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> bool {
        self.begin_session(id, SessionKind::Drag, pointer)
    }

    /// Start resizing a window from an edge or corner.
    ///
    /// Maximized windows cannot be resized.
    pub fn begin_resize(&mut self, id: &str, edge: ResizeEdge, pointer: Point) -> bool {
        if self.mode(id) == WindowMode::Maximized {
            tracing::debug!(window = id, "resize: window is maximized");
            return false;
        }
        self.begin_session(id, SessionKind::Resize(edge), pointer)
    }

    fn begin_session(&mut self, id: &str, kind: SessionKind, pointer: Point) -> bool {
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            return false;
        }
        if !self.mode(id).is_open() {
            tracing::debug!(window = id, "session: window not open");
            return false;
        }

        // One session at a time; a new pointer-down supersedes the old one.
        self.finish_session();

        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let session = Session::new(id.to_string(), kind, window.geometry, pointer, window.mode);
        window.mode = session.active_mode();
        tracing::debug!(window = id, ?kind, prior = ?session.prior_mode, "session started");

        self.session = Some(session);
        self.focus(id);
        true
    }

    /// Feed a pointer move to the active session.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            return false;
        }
        let area = self.area();
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let geometry = session.geometry_at(pointer, area, &self.config);
        let mut preview_changed = None;
        if session.kind == SessionKind::Drag {
            let preview = snap::detect(pointer, self.viewport, &self.config);
            if preview != session.preview {
                session.preview = preview;
                preview_changed = Some(preview);
            }
        }

        let id = session.window_id.clone();
        if let Some(window) = self.windows.get_mut(&id) {
            window.geometry = geometry;
        }
        self.surface.set_bounds(&id, geometry);

        if let Some(target) = preview_changed {
            self.publish(WmEvent::SnapPreviewChanged { id, target });
        }
        true
    }

    /// End the active session.
    ///
    /// Released outside the viewport the session is cancelled. A press and
    /// release at the same point is a click: the window keeps its prior mode
    /// and nothing is persisted. A drag released in a snap zone snaps;
    /// anything else commits the geometry and persists it for the current
    /// device class.
    pub fn pointer_up(&mut self, pointer: Point) -> bool {
        if self.session.is_none() {
            return false;
        }
        if !pointer.x.is_finite()
            || !pointer.y.is_finite()
            || !self.viewport.contains(pointer.x, pointer.y)
        {
            tracing::debug!(?pointer, "released outside viewport");
            return self.cancel_session();
        }

        let Some(session) = self.session.take() else {
            return false;
        };
        self.clear_preview(&session);

        let geometry = session.geometry_at(pointer, self.area(), &self.config);
        if pointer == session.start_pointer && geometry == session.start_geometry {
            self.settle_untouched(&session);
            return true;
        }
        let target = match session.kind {
            SessionKind::Drag => snap::detect(pointer, self.viewport, &self.config),
            SessionKind::Resize(_) => SnapTarget::None,
        };

        match snap::compute_geometry(target, self.viewport, &self.config) {
            Some(snapped) => self.snap_from_session(&session, target, snapped),
            None => self.commit(&session.window_id, geometry, session.prior_mode),
        }
        true
    }

    /// Abort the active session: back to the start geometry and the mode the
    /// window had before it. Nothing is persisted.
    pub fn cancel_session(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.clear_preview(&session);

        let id = session.window_id.as_str();
        if let Some(window) = self.windows.get_mut(id) {
            window.geometry = session.start_geometry;
            window.mode = session.prior_mode;
        }
        tracing::debug!(window = id, "session cancelled");
        self.sync_surface(id);
        true
    }

    /// End the active session where it stands.
    ///
    /// An untouched window goes back to its prior mode; a moved or resized
    /// one becomes normal and its geometry is persisted.
    pub(super) fn finish_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.clear_preview(&session);

        let id = session.window_id.as_str();
        let Some(geometry) = self.windows.get(id).map(|w| w.geometry) else {
            return;
        };
        if geometry == session.start_geometry {
            self.settle_untouched(&session);
        } else {
            self.commit(id, geometry, session.prior_mode);
        }
    }

    /// Put a window the session never moved back in its prior mode.
    fn settle_untouched(&mut self, session: &Session) {
        let id = session.window_id.as_str();
        if let Some(window) = self.windows.get_mut(id) {
            window.mode = session.prior_mode;
        }
        tracing::debug!(window = id, "session ended without movement");
        self.sync_surface(id);
    }

    fn snap_from_session(&mut self, session: &Session, target: SnapTarget, rect: Rect) {
        let Some(mode) = WindowMode::for_snap(target) else {
            return;
        };
        let id = session.window_id.as_str();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        // Re-snapping an already snapped window keeps its pre-snap geometry.
        if session.prior_mode == WindowMode::Normal || window.restore_geometry.is_none() {
            window.restore_geometry = Some(session.start_geometry);
        }
        window.geometry = rect;
        window.mode = mode;
        tracing::debug!(window = id, ?target, "snapped by drag");

        self.sync_surface(id);
        self.publish(WmEvent::Snapped {
            id: id.to_string(),
            target,
        });
    }

    /// Settle a window in normal mode at `geometry` and persist it.
    fn commit(&mut self, id: &str, geometry: Rect, prior_mode: WindowMode) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        window.geometry = geometry;
        window.mode = WindowMode::Normal;
        window.restore_geometry = None;
        tracing::debug!(window = id, ?geometry, "geometry committed");

        self.sync_surface(id);
        self.store.save(id, self.device_class, geometry);

        if prior_mode.is_snapped() {
            self.publish(WmEvent::Unsnapped { id: id.to_string() });
        }
        self.publish(WmEvent::GeometryCommitted {
            id: id.to_string(),
            geometry,
        });
    }

    /// Tell observers the drag preview is gone.
    fn clear_preview(&mut self, session: &Session) {
        if session.preview != SnapTarget::None {
            self.publish(WmEvent::SnapPreviewChanged {
                id: session.window_id.clone(),
                target: SnapTarget::None,
            });
        }
    }
}
