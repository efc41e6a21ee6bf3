use std::collections::HashMap;

use crate::focus::FocusHost;
use crate::math::{Rect, Size};
use crate::types::{ElementId, WindowId};

use super::Surface;

/// Element id focused by [`FocusHost::fallback_focus`]
pub const FALLBACK_ELEMENT: &str = "dock";

/// In-memory surface
///
/// Records everything the manager pushes to it so tests can assert on what a
/// browser would have rendered. Elements belong to a window (content
/// controls) or to nothing (dock buttons, launchers).
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    viewport: Size,
    bounds: HashMap<WindowId, Rect>,
    z_indices: HashMap<WindowId, u64>,
    visible: HashMap<WindowId, bool>,
    /// Live elements in document order with their owning window
    elements: Vec<(ElementId, Option<WindowId>)>,
    active: Option<ElementId>,
}

impl HeadlessSurface {
    /// Create a surface of the given size
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Add a focusable element inside a window's content
    pub fn with_element(mut self, window_id: &str, element: &str) -> Self {
        self.add_element(element, Some(window_id));
        self
    }

    /// Add a focusable element outside any window
    pub fn with_control(mut self, element: &str) -> Self {
        self.add_element(element, None);
        self
    }

    /// Pre-position a window element, as markup would
    pub fn with_bounds(mut self, window_id: &str, bounds: Rect) -> Self {
        self.bounds.insert(window_id.to_string(), bounds);
        self
    }

    /// Attach an element
    pub fn add_element(&mut self, element: &str, window_id: Option<&str>) {
        self.elements.retain(|(id, _)| id != element);
        self.elements
            .push((element.to_string(), window_id.map(str::to_string)));
    }

    /// Detach an element. Drops focus if it held it.
    pub fn remove_element(&mut self, element: &str) {
        self.elements.retain(|(id, _)| id != element);
        if self.active.as_deref() == Some(element) {
            self.active = None;
        }
    }

    /// Change the surface size
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Last bounds set for a window
    pub fn bounds(&self, window_id: &str) -> Option<Rect> {
        self.bounds.get(window_id).copied()
    }

    /// Last z-index set for a window
    pub fn z_index(&self, window_id: &str) -> Option<u64> {
        self.z_indices.get(window_id).copied()
    }

    /// Whether a window element is shown
    pub fn is_visible(&self, window_id: &str) -> bool {
        self.visible.get(window_id).copied().unwrap_or(false)
    }

    /// Focused element
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

impl FocusHost for HeadlessSurface {
    fn active_element(&self) -> Option<ElementId> {
        self.active.clone()
    }

    fn focus_element(&mut self, element: &str) -> bool {
        if self.contains_element(element) {
            self.active = Some(element.to_string());
            true
        } else {
            false
        }
    }

    fn contains_element(&self, element: &str) -> bool {
        self.elements.iter().any(|(id, _)| id == element)
    }

    fn focusable_elements(&self, window_id: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, owner)| owner.as_deref() == Some(window_id))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn fallback_focus(&mut self) {
        self.active = Some(FALLBACK_ELEMENT.to_string());
    }
}

impl Surface for HeadlessSurface {
    fn get_bounds(&self, window_id: &str) -> Option<Rect> {
        self.bounds(window_id)
    }

    fn set_bounds(&mut self, window_id: &str, bounds: Rect) {
        self.bounds.insert(window_id.to_string(), bounds);
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn set_z_index(&mut self, window_id: &str, z_index: u64) {
        self.z_indices.insert(window_id.to_string(), z_index);
    }

    fn set_visible(&mut self, window_id: &str, visible: bool) {
        self.visible.insert(window_id.to_string(), visible);
    }
}
