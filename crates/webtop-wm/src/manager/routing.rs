use crate::input::{InputEvent, InputResult, Key};
use crate::surface::Surface;
use crate::window::{WindowMode, WindowRegion};

use super::WindowManager;

impl<S: Surface> WindowManager<S> {
    /// Route a host event to the matching operation.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResult {
        let handled = match event {
            InputEvent::PointerDown {
                window_id,
                region,
                pointer,
            } => match region {
                WindowRegion::TitleBar => self.begin_drag(&window_id, pointer),
                WindowRegion::Resize(edge) => self.begin_resize(&window_id, edge, pointer),
            },
            InputEvent::PointerMove { pointer } => self.pointer_move(pointer),
            InputEvent::PointerUp { pointer } => self.pointer_up(pointer),
            InputEvent::KeyDown { key, shift } => match key {
                Key::Escape => self.cancel_session(),
                Key::Tab => self.handle_tab(shift),
                Key::Other(_) => false,
            },
            InputEvent::ViewportResize { size } => {
                self.viewport_resized(size);
                true
            }
            InputEvent::DockItemClick { window_id } => self.dock_click(&window_id),
            InputEvent::CloseButtonClick { window_id } => {
                let open = self.mode(&window_id) != WindowMode::Closed;
                self.close(&window_id);
                open
            }
        };
        InputResult::from_handled(handled)
    }

    /// Move keyboard focus within the active modal trap.
    ///
    /// Returns `false` when no trap is active and the browser should traverse
    /// normally.
    pub fn handle_tab(&mut self, backward: bool) -> bool {
        let windows = &self.windows;
        self.focus.handle_tab(&mut self.surface, backward, |id| {
            windows.get(id).is_some_and(|w| w.mode.is_open())
        })
    }

    /// Dock item clicked: open closed or minimized windows, minimize the
    /// focused one, focus any other.
    pub fn dock_click(&mut self, id: &str) -> bool {
        if self.definition(id).is_none() {
            tracing::debug!(window = id, "dock: unknown window");
            return false;
        }

        match self.mode(id) {
            WindowMode::Closed | WindowMode::Minimized => self.open(id),
            _ if self.focused.as_deref() == Some(id) => self.minimize(id),
            _ => self.focus(id),
        }
        true
    }
}
