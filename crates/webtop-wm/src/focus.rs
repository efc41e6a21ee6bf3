//! Focus controller
//!
//! Keeps keyboard focus sane around window lifecycle:
//!
//! - remembers which element had focus when a window opened (the invoker)
//! - traps Tab/Shift-Tab traversal inside modal windows while they are open
//! - hands focus back to the invoker on close, or to a fallback target (the
//!   dock) when the invoker has left the surface

use std::collections::HashMap;

use crate::types::{ElementId, WindowId};

/// Host-side focus operations
pub trait FocusHost {
    /// Element currently holding keyboard focus
    fn active_element(&self) -> Option<ElementId>;

    /// Move focus to `element`. Returns `false` if it could not be focused.
    fn focus_element(&mut self, element: &str) -> bool;

    /// Whether `element` is still attached to the surface
    fn contains_element(&self, element: &str) -> bool;

    /// Focusable elements inside a window's content, in traversal order
    ///
    /// Hosts that address elements by id may assign ids to anonymous
    /// elements here, so the query can write to the host.
    fn focusable_elements(&self, window_id: &str) -> Vec<ElementId>;

    /// Focus the stable default target (the dock)
    fn fallback_focus(&mut self);
}

/// Where focus went when a window released it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusRestore {
    /// Back to the element that opened the window
    Invoker(ElementId),
    /// Invoker unknown or gone; the fallback target was focused
    Fallback,
}

/// Invoker memory and modal focus traps
#[derive(Debug, Default)]
pub struct FocusController {
    invokers: HashMap<WindowId, ElementId>,
    /// Trapped windows, most recent last
    traps: Vec<WindowId>,
}

impl FocusController {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the element focused right now as `window_id`'s invoker.
    pub fn capture_invoker<H: FocusHost + ?Sized>(&mut self, window_id: &str, host: &H) {
        match host.active_element() {
            Some(element) => {
                tracing::trace!(window = window_id, element = %element, "captured invoker");
                self.invokers.insert(window_id.to_string(), element);
            }
            None => {
                self.invokers.remove(window_id);
            }
        }
    }

    /// Invoker recorded for a window
    pub fn invoker(&self, window_id: &str) -> Option<&str> {
        self.invokers.get(window_id).map(String::as_str)
    }

    /// Constrain keyboard traversal to `window_id` until released.
    pub fn trap(&mut self, window_id: &str) {
        self.traps.retain(|id| id != window_id);
        self.traps.push(window_id.to_string());
    }

    /// Whether a window is trapping focus
    pub fn is_trapped(&self, window_id: &str) -> bool {
        self.traps.iter().any(|id| id == window_id)
    }

    /// Most recent trap whose window satisfies `is_open`
    pub fn active_trap(&self, is_open: impl Fn(&str) -> bool) -> Option<&str> {
        self.traps
            .iter()
            .rev()
            .map(String::as_str)
            .find(|id| is_open(id))
    }

    /// Drop the trap and return focus to the invoker (or the fallback).
    pub fn release<H: FocusHost + ?Sized>(&mut self, window_id: &str, host: &mut H) -> FocusRestore {
        self.traps.retain(|id| id != window_id);

        if let Some(invoker) = self.invokers.remove(window_id) {
            if host.contains_element(&invoker) && host.focus_element(&invoker) {
                return FocusRestore::Invoker(invoker);
            }
            tracing::debug!(window = window_id, element = %invoker, "invoker gone, using fallback");
        }
        host.fallback_focus();
        FocusRestore::Fallback
    }

    /// Handle Tab/Shift-Tab while a trap is active.
    ///
    /// Returns `true` when the key was consumed (a trap is active), in which
    /// case the host must suppress the browser's default traversal.
    pub fn handle_tab<H: FocusHost + ?Sized>(
        &self,
        host: &mut H,
        backward: bool,
        is_open: impl Fn(&str) -> bool,
    ) -> bool {
        let Some(trap) = self.active_trap(is_open) else {
            return false;
        };
        let focusables = host.focusable_elements(trap);
        let current = host.active_element();
        if let Some(next) = next_in_trap(current.as_deref(), &focusables, backward) {
            host.focus_element(&next);
        }
        true
    }
}

/// Next element in a wrap-around traversal.
///
/// If `current` is not in the list (focus escaped the window), traversal
/// re-enters at the first element (or the last one when going backward).
pub fn next_in_trap(current: Option<&str>, focusables: &[ElementId], backward: bool) -> Option<ElementId> {
    let len = focusables.len();
    if len == 0 {
        return None;
    }

    let position = current.and_then(|c| focusables.iter().position(|e| e == c));
    let index = match (position, backward) {
        (Some(i), false) => (i + 1) % len,
        (Some(i), true) => (i + len - 1) % len,
        (None, false) => 0,
        (None, true) => len - 1,
    };
    focusables.get(index).cloned()
}
