//! Window manager (orchestrator)
//!
//! Owns the window registry, the z-order counter, the cascade counter and the
//! single active drag/resize session. Every public operation matches on the
//! window's [`WindowMode`] first and is a silent no-op for unknown ids and
//! invalid source states.
//!
//! After every operation:
//! - at most one window is focused
//! - open windows have pairwise distinct z-indices, the focused one the highest
//! - minimized and closed windows are never hit-tested

mod routing;
mod sessions;
mod snapping;
mod snapshot;
mod viewport;

pub use snapshot::WorkspaceSnapshot;

use std::collections::HashMap;

use webtop_store::KeyValueStore;

use crate::bounds::clamp_to_area;
use crate::config::WmConfig;
use crate::device::DeviceClass;
use crate::dock::{DockItem, DockState};
use crate::events::{EventBus, SubscriptionId, WmEvent};
use crate::focus::{FocusController, FocusHost};
use crate::input::Session;
use crate::math::{Point, Rect, Size};
use crate::persistence::GeometryStore;
use crate::surface::Surface;
use crate::types::WindowId;
use crate::window::{Window, WindowDefinition, WindowMode};

/// The window manager
pub struct WindowManager<S: Surface> {
    config: WmConfig,
    surface: S,
    store: GeometryStore,
    focus: FocusController,
    bus: EventBus,
    /// Registered definitions in registration order
    definitions: Vec<WindowDefinition>,
    /// Windows opened at least once this session
    windows: HashMap<WindowId, Window>,
    focused: Option<WindowId>,
    /// Last allocated z-index
    z_counter: u64,
    cascade_counter: u32,
    session: Option<Session>,
    viewport: Size,
    device_class: DeviceClass,
}

impl<S: Surface> WindowManager<S> {
    /// Create a manager drawing on `surface` and persisting into `store`.
    pub fn new(config: WmConfig, surface: S, store: impl KeyValueStore + 'static) -> Self {
        let config = config.validated();
        let viewport = viewport::sanitize(surface.viewport_size());
        let device_class = DeviceClass::classify(viewport.width, &config.breakpoints);
        let store = GeometryStore::new(store, config.storage_namespace.clone());

        tracing::debug!(?viewport, %device_class, "window manager created");

        Self {
            z_counter: config.base_z_index,
            config,
            surface,
            store,
            focus: FocusController::new(),
            bus: EventBus::new(),
            definitions: Vec::new(),
            windows: HashMap::new(),
            focused: None,
            cascade_counter: 0,
            session: None,
            viewport,
            device_class,
        }
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Add a window definition. An existing definition with the same id is
    /// replaced; a live window keeps its state.
    pub fn register(&mut self, definition: WindowDefinition) {
        match self.definitions.iter_mut().find(|d| d.id == definition.id) {
            Some(existing) => *existing = definition,
            None => self.definitions.push(definition),
        }
    }

    /// Registered definitions in registration order
    pub fn definitions(&self) -> &[WindowDefinition] {
        &self.definitions
    }

    fn definition(&self, id: &str) -> Option<&WindowDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window, or bring it forward if it is already open.
    pub fn open(&mut self, id: &str) {
        if self.definition(id).is_none() {
            tracing::debug!(window = id, "open: unknown window");
            return;
        }

        match self.mode(id) {
            WindowMode::Closed => self.open_closed(id),
            WindowMode::Minimized => self.restore_minimized(id),
            _ => self.focus(id),
        }
    }

    fn open_closed(&mut self, id: &str) {
        let Some(definition) = self.definition(id).cloned() else {
            return;
        };

        let cached = self
            .windows
            .get(id)
            .filter(|w| w.mode == WindowMode::Closed)
            .map(|w| w.geometry);
        let geometry = match cached {
            Some(geometry) => geometry,
            None => match self.store.load(id, self.device_class) {
                Some(geometry) => geometry,
                None => self.cascaded_default(&definition),
            },
        };
        let geometry = clamp_to_area(geometry, self.area(), &self.config);

        self.focus.capture_invoker(id, &self.surface);
        self.z_counter += 1;
        let window = Window {
            id: definition.id.clone(),
            title: definition.title.clone(),
            geometry,
            z_index: self.z_counter,
            mode: WindowMode::Normal,
            restore_geometry: None,
            is_modal: definition.modal,
        };
        tracing::debug!(window = id, ?geometry, z = window.z_index, "opened");
        self.windows.insert(window.id.clone(), window);

        let previous = self.focused.replace(id.to_string());
        self.sync_surface(id);

        if definition.modal {
            self.focus.trap(id);
            let first = self.surface.focusable_elements(id).into_iter().next();
            if let Some(first) = first {
                self.surface.focus_element(&first);
            }
        }

        self.publish(WmEvent::Opened { id: id.to_string() });
        if previous.as_deref() != Some(id) {
            self.publish(WmEvent::Focused { id: id.to_string() });
        }
    }

    /// Default geometry for a first open, offset along the cascade.
    fn cascaded_default(&mut self, definition: &WindowDefinition) -> Rect {
        let area = self.area();
        let base = definition
            .default_geometry
            .or_else(|| self.surface.get_bounds(&definition.id))
            .filter(|rect| rect.is_finite() && rect.width > 0.0 && rect.height > 0.0)
            .unwrap_or_else(|| {
                let width = self.config.min_window_size.width * 2.0;
                let height = self.config.min_window_size.height * 2.0;
                Rect::new(
                    area.top + ((area.height - height) / 2.0).max(0.0),
                    area.left + ((area.width - width) / 2.0).max(0.0),
                    width,
                    height,
                )
            });

        let step = (self.cascade_counter % self.config.cascade_wrap) as f64 * self.config.cascade_step;
        self.cascade_counter = self.cascade_counter.wrapping_add(1);
        base.translate(Point::new(step, step))
    }

    fn restore_minimized(&mut self, id: &str) {
        let area = self.area();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        let geometry = window.restore_geometry.take().unwrap_or(window.geometry);
        window.geometry = clamp_to_area(geometry, area, &self.config);
        window.mode = WindowMode::Normal;
        tracing::debug!(window = id, geometry = ?window.geometry, "restored");

        self.publish(WmEvent::Restored { id: id.to_string() });
        self.focus(id);
    }

    /// Close a window from any non-closed mode.
    ///
    /// The geometry it would have in `normal` stays cached for the next open.
    pub fn close(&mut self, id: &str) {
        if matches!(self.mode(id), WindowMode::Closed) {
            tracing::debug!(window = id, "close: not open");
            return;
        }
        if self.session.as_ref().is_some_and(|s| s.window_id == id) {
            self.cancel_session();
        }

        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        window.geometry = window.normal_geometry();
        window.restore_geometry = None;
        window.mode = WindowMode::Closed;
        tracing::debug!(window = id, cached = ?window.geometry, "closed");

        self.surface.set_visible(id, false);
        let restored = self.focus.release(id, &mut self.surface);
        tracing::trace!(window = id, ?restored, "focus released");

        self.publish(WmEvent::Closed { id: id.to_string() });
        self.fall_through_focus(id);
    }

    /// Bring an open window to the front and focus it.
    pub fn focus(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            tracing::debug!(window = id, "focus: unknown window");
            return;
        };
        if !window.mode.is_open() {
            tracing::debug!(window = id, mode = ?window.mode, "focus: not open");
            return;
        }

        self.z_counter += 1;
        window.z_index = self.z_counter;
        self.surface.set_z_index(id, self.z_counter);

        let previous = self.focused.replace(id.to_string());
        if previous.as_deref() != Some(id) {
            tracing::trace!(window = id, z = self.z_counter, "focused");
            self.publish(WmEvent::Focused { id: id.to_string() });
        }
    }

    /// Minimize a normal, snapped or maximized window.
    ///
    /// A snapped window keeps its pre-snap restore geometry, so restoring it
    /// later returns to where it was before snapping.
    pub fn minimize(&mut self, id: &str) {
        if self.session.as_ref().is_some_and(|s| s.window_id == id) {
            self.finish_session();
        }

        let Some(window) = self.windows.get_mut(id) else {
            tracing::debug!(window = id, "minimize: unknown window");
            return;
        };
        match window.mode {
            WindowMode::Normal => window.restore_geometry = Some(window.geometry),
            WindowMode::SnappedLeft | WindowMode::SnappedRight | WindowMode::Maximized => {
                if window.restore_geometry.is_none() {
                    window.restore_geometry = Some(window.geometry);
                }
            }
            mode => {
                tracing::debug!(window = id, ?mode, "minimize: invalid state");
                return;
            }
        }
        window.mode = WindowMode::Minimized;
        tracing::debug!(window = id, "minimized");

        self.surface.set_visible(id, false);
        self.publish(WmEvent::Minimized { id: id.to_string() });
        self.fall_through_focus(id);
    }

    /// If `id` was focused, hand focus to the topmost remaining open window.
    fn fall_through_focus(&mut self, id: &str) {
        if self.focused.as_deref() != Some(id) {
            return;
        }
        self.focused = self
            .windows
            .values()
            .filter(|w| w.mode.is_open())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());

        if let Some(next) = self.focused.clone() {
            tracing::trace!(window = %next, "focus fell through");
            self.publish(WmEvent::Focused { id: next });
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Open (non-closed, non-minimized) windows, lowest z-index first
    pub fn get_open_windows(&self) -> Vec<&Window> {
        let mut open: Vec<&Window> = self.windows.values().filter(|w| w.mode.is_open()).collect();
        open.sort_by_key(|w| w.z_index);
        open
    }

    /// Topmost open window containing `point`
    pub fn window_at(&self, point: Point) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.mode.is_open() && w.geometry.contains(point))
            .max_by_key(|w| w.z_index)
    }

    /// Look up a window opened at least once
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Mode of a window; never-opened windows are closed.
    pub fn mode(&self, id: &str) -> WindowMode {
        self.windows.get(id).map(|w| w.mode).unwrap_or_default()
    }

    /// Focused window
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// One dock item per registered definition, in registration order
    pub fn dock_items(&self) -> Vec<DockItem> {
        self.definitions
            .iter()
            .map(|definition| DockItem {
                id: definition.id.clone(),
                title: definition.title.clone(),
                state: DockState::from_mode(
                    self.mode(&definition.id),
                    self.focused.as_deref() == Some(definition.id.as_str()),
                ),
            })
            .collect()
    }

    /// Active drag/resize session
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current device class
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Current viewport size
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Effective configuration
    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    /// Persisted geometry store
    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    /// Get the surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get the surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register an observer
    pub fn subscribe(&mut self, listener: impl FnMut(&WmEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    /// Remove an observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    fn publish(&mut self, event: WmEvent) {
        self.bus.publish(event);
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Part of the viewport windows may occupy
    fn area(&self) -> Rect {
        self.config.usable_area(self.viewport)
    }

    /// Push a window's geometry, stacking and visibility to the surface.
    fn sync_surface(&mut self, id: &str) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        self.surface.set_bounds(id, window.geometry);
        self.surface.set_z_index(id, window.z_index);
        self.surface.set_visible(id, window.mode.is_open());
    }
}

impl<S: Surface> std::fmt::Debug for WindowManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows.len())
            .field("focused", &self.focused)
            .field("z_counter", &self.z_counter)
            .field("device_class", &self.device_class)
            .finish_non_exhaustive()
    }
}
