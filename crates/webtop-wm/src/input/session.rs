//! Drag/resize session
//!
//! A session lives from pointer-down to pointer-up (or cancel) and owns the
//! data needed to compute geometry from the pointer: the window's start
//! geometry, the start pointer, and the mode to return to on cancel. All
//! session state lives here, so unrelated events that fire mid-gesture
//! cannot corrupt it.

use serde::Serialize;

use crate::bounds::calculate_move;
use crate::config::WmConfig;
use crate::math::{Point, Rect, Size};
use crate::snap::SnapTarget;
use crate::types::WindowId;
use crate::window::{ResizeEdge, WindowMode};

/// What the gesture does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "edge", rename_all = "snake_case")]
pub enum SessionKind {
    Drag,
    Resize(ResizeEdge),
}

/// Active pointer gesture on one window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    pub window_id: WindowId,
    pub kind: SessionKind,
    /// Geometry when the gesture started
    pub start_geometry: Rect,
    /// Pointer position at pointer-down
    pub start_pointer: Point,
    /// Mode to restore on cancel
    pub prior_mode: WindowMode,
    /// Snap preview last reported to observers
    pub preview: SnapTarget,
}

impl Session {
    /// Start a session
    pub fn new(
        window_id: WindowId,
        kind: SessionKind,
        start_geometry: Rect,
        start_pointer: Point,
        prior_mode: WindowMode,
    ) -> Self {
        Self {
            window_id,
            kind,
            start_geometry,
            start_pointer,
            prior_mode,
            preview: SnapTarget::None,
        }
    }

    /// Mode the window is in while this session is active
    pub fn active_mode(&self) -> WindowMode {
        match self.kind {
            SessionKind::Drag => WindowMode::Dragging,
            SessionKind::Resize(_) => WindowMode::Resizing,
        }
    }

    /// Geometry for the current pointer position
    pub fn geometry_at(&self, pointer: Point, area: Rect, config: &WmConfig) -> Rect {
        let delta = pointer - self.start_pointer;
        match self.kind {
            SessionKind::Drag => calculate_move(self.start_geometry, delta, area, config),
            SessionKind::Resize(edge) => {
                calculate_resize(edge, self.start_geometry, delta, area, config.min_window_size)
            }
        }
    }
}

/// Resize `start` by dragging `edge` by `delta`.
///
/// The opposite edge stays fixed. Width and height are clamped to `min` and
/// to the room between the fixed edge and the area boundary.
pub fn calculate_resize(edge: ResizeEdge, start: Rect, delta: Point, area: Rect, min: Size) -> Rect {
    let mut rect = start;

    if edge.east() {
        let limit = (area.right() - start.left).max(min.width);
        rect.width = (start.width + delta.x).clamp(min.width, limit);
    } else if edge.west() {
        let right = start.right();
        let limit = (right - area.left).max(min.width);
        rect.width = (start.width - delta.x).clamp(min.width, limit);
        rect.left = (right - rect.width).max(area.left);
    }

    if edge.south() {
        let limit = (area.bottom() - start.top).max(min.height);
        rect.height = (start.height + delta.y).clamp(min.height, limit);
    } else if edge.north() {
        let bottom = start.bottom();
        let limit = (bottom - area.top).max(min.height);
        rect.height = (start.height - delta.y).clamp(min.height, limit);
        rect.top = (bottom - rect.height).max(area.top);
    }

    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 752.0)
    }

    fn min() -> Size {
        Size::new(200.0, 150.0)
    }

    fn start() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 300.0)
    }

    #[test]
    fn test_resize_se_grows() {
        let rect = calculate_resize(ResizeEdge::SE, start(), Point::new(50.0, 30.0), area(), min());
        assert_eq!(rect, Rect::new(100.0, 100.0, 450.0, 330.0));
    }

    #[test]
    fn test_resize_nw_keeps_bottom_right_fixed() {
        let rect = calculate_resize(ResizeEdge::NW, start(), Point::new(-40.0, -20.0), area(), min());
        assert_eq!(rect, Rect::new(80.0, 60.0, 440.0, 320.0));
        assert_eq!(rect.right(), start().right());
        assert_eq!(rect.bottom(), start().bottom());
    }

    #[test]
    fn test_resize_floor_from_every_edge() {
        let shrink = Point::new(-1000.0, -1000.0);
        let grow = Point::new(1000.0, 1000.0);

        let e = calculate_resize(ResizeEdge::E, start(), shrink, area(), min());
        assert_eq!(e.width, 200.0);

        let s = calculate_resize(ResizeEdge::S, start(), shrink, area(), min());
        assert_eq!(s.height, 150.0);

        let w = calculate_resize(ResizeEdge::W, start(), grow, area(), min());
        assert_eq!(w.width, 200.0);
        assert_eq!(w.right(), start().right());

        let n = calculate_resize(ResizeEdge::N, start(), grow, area(), min());
        assert_eq!(n.height, 150.0);
        assert_eq!(n.bottom(), start().bottom());
    }

    #[test]
    fn test_resize_limited_by_area() {
        let rect = calculate_resize(ResizeEdge::SE, start(), Point::new(5000.0, 5000.0), area(), min());
        assert_eq!(rect.right(), 1280.0);
        assert_eq!(rect.bottom(), 752.0);

        let rect = calculate_resize(ResizeEdge::NW, start(), Point::new(-5000.0, -5000.0), area(), min());
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
    }

    #[test]
    fn test_session_drag_geometry() {
        let config = WmConfig::default();
        let session = Session::new(
            "about".to_string(),
            SessionKind::Drag,
            start(),
            Point::new(300.0, 110.0),
            WindowMode::Normal,
        );
        assert_eq!(session.active_mode(), WindowMode::Dragging);

        let rect = session.geometry_at(Point::new(325.0, 150.0), area(), &config);
        assert_eq!(rect, Rect::new(140.0, 125.0, 400.0, 300.0));
    }

    #[test]
    fn test_session_resize_geometry() {
        let config = WmConfig::default();
        let session = Session::new(
            "about".to_string(),
            SessionKind::Resize(ResizeEdge::E),
            start(),
            Point::new(500.0, 200.0),
            WindowMode::Normal,
        );
        assert_eq!(session.active_mode(), WindowMode::Resizing);

        let rect = session.geometry_at(Point::new(560.0, 260.0), area(), &config);
        assert_eq!(rect, Rect::new(100.0, 100.0, 460.0, 300.0));
    }
}
