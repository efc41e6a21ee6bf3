//! DOM-backed surface
//!
//! Window elements are looked up by their `id` attribute, which is the
//! window id. Geometry is written as absolute CSS pixels on the element's
//! inline style.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::focus::FocusHost;
use crate::math::{Rect, Size};
use crate::types::ElementId;

use super::Surface;

/// Elements keyboard traversal can land on inside a window
const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
    select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Surface driving the page's window elements
pub struct DomSurface {
    window: web_sys::Window,
    document: Document,
    fallback_id: String,
}

impl DomSurface {
    /// Attach to the current page. `fallback_id` is the element focused when
    /// a window's invoker is gone (usually the dock).
    pub fn attach(fallback_id: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            fallback_id: fallback_id.to_string(),
        })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        let Some(element) = self.html_element(id) else {
            tracing::debug!(element = id, "style target missing");
            return;
        };
        if let Err(e) = element.style().set_property(property, value) {
            tracing::warn!(element = id, property, error = ?e, "failed to set style");
        }
    }
}

impl FocusHost for DomSurface {
    fn active_element(&self) -> Option<ElementId> {
        let id = self.document.active_element()?.id();
        (!id.is_empty()).then_some(id)
    }

    fn focus_element(&mut self, element: &str) -> bool {
        self.html_element(element)
            .map(|el| el.focus().is_ok())
            .unwrap_or(false)
    }

    fn contains_element(&self, element: &str) -> bool {
        self.element(element).is_some()
    }

    /// Anonymous focusable elements are given a `{window}-focusable-{n}` id
    /// the first time they are listed.
    fn focusable_elements(&self, window_id: &str) -> Vec<ElementId> {
        let Some(root) = self.element(window_id) else {
            return Vec::new();
        };
        let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
            return Vec::new();
        };

        let mut ids = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            // Traversal addresses elements by id; name anonymous ones.
            if element.id().is_empty() {
                element.set_id(&format!("{}-focusable-{}", window_id, index));
            }
            ids.push(element.id());
        }
        ids
    }

    fn fallback_focus(&mut self) {
        let fallback = self.fallback_id.clone();
        if !self.focus_element(&fallback) {
            tracing::debug!(element = %fallback, "fallback focus target missing");
        }
    }
}

impl Surface for DomSurface {
    /// Layout offsets, in the same space `set_bounds` writes. Hidden
    /// (`display: none`) elements have no layout and report `None`.
    fn get_bounds(&self, window_id: &str) -> Option<Rect> {
        let element = self.html_element(window_id)?;
        let (width, height) = (element.offset_width(), element.offset_height());
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Rect::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_left()),
            f64::from(width),
            f64::from(height),
        ))
    }

    fn set_bounds(&mut self, window_id: &str, bounds: Rect) {
        self.set_style(window_id, "top", &format!("{}px", bounds.top));
        self.set_style(window_id, "left", &format!("{}px", bounds.left));
        self.set_style(window_id, "width", &format!("{}px", bounds.width));
        self.set_style(window_id, "height", &format!("{}px", bounds.height));
    }

    fn viewport_size(&self) -> Size {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Size::new(width.unwrap_or(0.0), height.unwrap_or(0.0))
    }

    fn set_z_index(&mut self, window_id: &str, z_index: u64) {
        self.set_style(window_id, "z-index", &z_index.to_string());
    }

    fn set_visible(&mut self, window_id: &str, visible: bool) {
        self.set_style(window_id, "display", if visible { "" } else { "none" });
    }
}
