//! Browser bindings
//!
//! [`WebDesktop`] wraps a [`WindowManager`] drawing on the page through
//! [`DomSurface`] and persisting into `localStorage`. Structured values cross
//! the boundary as JSON strings.

use std::str::FromStr;

use wasm_bindgen::prelude::*;
use webtop_store::LocalStorage;

use crate::config::WmConfig;
use crate::dock::DockItem;
use crate::input::{InputEvent, Key};
use crate::math::{Point, Size};
use crate::snap::SnapTarget;
use crate::surface::DomSurface;
use crate::window::{ResizeEdge, WindowDefinition};
use crate::WindowManager;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Window manager bound to the current page
#[wasm_bindgen]
pub struct WebDesktop {
    manager: WindowManager<DomSurface>,
}

#[wasm_bindgen]
impl WebDesktop {
    /// Attach to the page. `config_json` may be omitted for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, fallback_focus_id: Option<String>) -> Result<WebDesktop, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => WmConfig::from_json(&json).map_err(js_error)?,
            None => WmConfig::default(),
        };
        let fallback = fallback_focus_id.unwrap_or_else(|| "dock".to_string());
        let surface = DomSurface::attach(&fallback)
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let store = LocalStorage::open().map_err(js_error)?;

        Ok(WebDesktop {
            manager: WindowManager::new(config, surface, store),
        })
    }

    /// Register a window definition given as JSON
    /// (`{"id", "title", "default_geometry"?, "modal"?}`).
    pub fn register(&mut self, definition_json: &str) -> Result<(), JsValue> {
        let definition: WindowDefinition = serde_json::from_str(definition_json).map_err(js_error)?;
        self.manager.register(definition);
        Ok(())
    }

    pub fn open(&mut self, id: &str) {
        self.manager.open(id);
    }

    pub fn close(&mut self, id: &str) {
        self.manager.close(id);
    }

    pub fn focus(&mut self, id: &str) {
        self.manager.focus(id);
    }

    pub fn minimize(&mut self, id: &str) {
        self.manager.minimize(id);
    }

    /// `target` is `left`, `right` or `maximize`.
    pub fn toggle_snap(&mut self, id: &str, target: &str) -> Result<(), JsValue> {
        let target = SnapTarget::from_str(target).map_err(js_error)?;
        self.manager.toggle_snap(id, target);
        Ok(())
    }

    pub fn begin_drag(&mut self, id: &str, x: f64, y: f64) -> bool {
        self.manager.begin_drag(id, Point::new(x, y))
    }

    /// `edge` is one of `n s e w ne nw se sw`.
    pub fn begin_resize(&mut self, id: &str, edge: &str, x: f64, y: f64) -> Result<bool, JsValue> {
        let edge = ResizeEdge::from_str(edge).map_err(js_error)?;
        Ok(self.manager.begin_resize(id, edge, Point::new(x, y)))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.manager.pointer_move(Point::new(x, y))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.manager.pointer_up(Point::new(x, y))
    }

    /// Returns `true` when the host should call `preventDefault()`.
    pub fn key_down(&mut self, key: &str, shift: bool) -> bool {
        self.manager
            .handle_input(InputEvent::KeyDown {
                key: Key::from_dom(key),
                shift,
            })
            .is_handled()
    }

    pub fn viewport_resized(&mut self, width: f64, height: f64) {
        self.manager.viewport_resized(Size::new(width, height));
    }

    pub fn dock_click(&mut self, id: &str) -> bool {
        self.manager.dock_click(id)
    }

    /// Dock items as a JSON array
    pub fn dock_items_json(&self) -> Result<String, JsValue> {
        let items: Vec<DockItem> = self.manager.dock_items();
        serde_json::to_string(&items).map_err(js_error)
    }

    pub fn focused(&self) -> Option<String> {
        self.manager.focused().map(str::to_string)
    }

    /// Workspace state as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.manager.snapshot_json().map_err(js_error)
    }

    /// Call `callback(eventJson)` for every window manager event.
    ///
    /// Callbacks run synchronously inside the triggering call and must not
    /// call back into this object; defer with a microtask instead.
    pub fn on_event(&mut self, callback: js_sys::Function) {
        self.manager.subscribe(move |event| {
            let json = match serde_json::to_string(event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode event");
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                web_sys::console::error_1(&e);
            }
        });
    }
}
