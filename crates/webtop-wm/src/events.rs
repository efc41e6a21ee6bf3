//! Outbound window manager events
//!
//! The manager publishes lifecycle events to an [`EventBus`]. The dock,
//! sound effects and achievements subscribe; the manager never waits on or
//! depends on what listeners do.

use std::fmt;

use serde::Serialize;

use crate::device::DeviceClass;
use crate::math::Rect;
use crate::snap::SnapTarget;
use crate::types::WindowId;

/// Lifecycle notification
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WmEvent {
    Opened { id: WindowId },
    Closed { id: WindowId },
    Focused { id: WindowId },
    Minimized { id: WindowId },
    /// Came back from minimized
    Restored { id: WindowId },
    Snapped { id: WindowId, target: SnapTarget },
    /// Left a snapped or maximized state for normal
    Unsnapped { id: WindowId },
    /// Snap zone under the pointer changed during a drag
    SnapPreviewChanged { id: WindowId, target: SnapTarget },
    /// A drag or resize ended with the window in normal mode
    GeometryCommitted { id: WindowId, geometry: Rect },
    DeviceClassChanged { from: DeviceClass, to: DeviceClass },
}

impl WmEvent {
    /// Window the event concerns, if any
    pub fn window_id(&self) -> Option<&str> {
        match self {
            WmEvent::Opened { id }
            | WmEvent::Closed { id }
            | WmEvent::Focused { id }
            | WmEvent::Minimized { id }
            | WmEvent::Restored { id }
            | WmEvent::Snapped { id, .. }
            | WmEvent::Unsnapped { id }
            | WmEvent::SnapPreviewChanged { id, .. }
            | WmEvent::GeometryCommitted { id, .. } => Some(id),
            WmEvent::DeviceClassChanged { .. } => None,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&WmEvent)>;

/// Synchronous observer list
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl FnMut(&WmEvent) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener in subscription order
    pub fn publish(&mut self, event: WmEvent) {
        tracing::trace!(?event, "publish");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
