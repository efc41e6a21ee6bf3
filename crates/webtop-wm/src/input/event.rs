use serde::{Deserialize, Serialize};

use crate::math::{Point, Size};
use crate::types::WindowId;
use crate::window::WindowRegion;

/// Keys the window manager reacts to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Tab,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Inbound event from the host surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed on a window's title bar or resize edge
    PointerDown {
        window_id: WindowId,
        region: WindowRegion,
        pointer: Point,
    },
    PointerMove {
        pointer: Point,
    },
    PointerUp {
        pointer: Point,
    },
    KeyDown {
        key: Key,
        shift: bool,
    },
    ViewportResize {
        size: Size,
    },
    DockItemClick {
        window_id: WindowId,
    },
    CloseButtonClick {
        window_id: WindowId,
    },
}

/// Result of routing an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The manager consumed the event; the host should prevent its default
    Handled,
    /// Not for the window manager
    Unhandled,
}

impl InputResult {
    /// Convert a "did something" flag
    pub fn from_handled(handled: bool) -> Self {
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Whether the event was consumed
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Tab"), Key::Tab);
        assert_eq!(Key::from_dom("a"), Key::Other("a".to_string()));
    }

    #[test]
    fn test_event_deserialize() {
        let event: InputEvent = serde_json::from_str(
            r#"{ "type": "pointer_down", "window_id": "about",
                 "region": { "resize": "se" }, "pointer": { "x": 1, "y": 2 } }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            InputEvent::PointerDown {
                window_id: "about".to_string(),
                region: WindowRegion::Resize(crate::window::ResizeEdge::SE),
                pointer: Point::new(1.0, 2.0),
            }
        );
    }

    #[test]
    fn test_input_result() {
        assert!(InputResult::from_handled(true).is_handled());
        assert!(!InputResult::from_handled(false).is_handled());
    }
}
