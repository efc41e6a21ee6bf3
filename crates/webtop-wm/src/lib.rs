//! Window manager core for the webtop browser desktop
//!
//! This crate owns every window's geometry, stacking order, interaction mode
//! and focus lifecycle, and keeps them consistent under interleaved pointer
//! and keyboard input:
//! - Window lifecycle (open, close, focus, minimize) and z-order
//! - Edge snapping and maximize
//! - Drag and resize sessions
//! - Modal focus traps and invoker restore
//! - Geometry persistence per device class
//!
//! ## Architecture
//!
//! - [`math`]: geometry types (`Point`, `Rect`, `Size`)
//! - [`window`]: window model and definitions
//! - [`snap`]: snap zones and snap rectangles
//! - [`input`]: inbound events and the drag/resize session
//! - [`focus`]: invoker memory and focus traps
//! - [`persistence`]: geometry records in a key-value store
//! - [`surface`]: the host surface the windows are drawn on
//! - [`manager`]: the orchestrator tying it all together
//!
//! ## Example
//!
//! ```rust
//! use webtop_store::MemoryStore;
//! use webtop_wm::{HeadlessSurface, Rect, Size, WindowDefinition, WindowManager, WmConfig};
//!
//! let surface = HeadlessSurface::new(Size::new(1280.0, 800.0));
//! let mut wm = WindowManager::new(WmConfig::default(), surface, MemoryStore::new());
//!
//! wm.register(WindowDefinition::new("about", "About").with_geometry(Rect::new(80.0, 120.0, 480.0, 320.0)));
//! wm.open("about");
//!
//! assert_eq!(wm.focused(), Some("about"));
//! assert_eq!(wm.get_open_windows().len(), 1);
//! ```
//!
//! The core has no browser dependencies; the `wasm` feature adds the DOM
//! surface, the `localStorage` backend and the `WebDesktop` bindings.

pub mod bounds;
pub mod config;
pub mod device;
pub mod dock;
pub mod error;
pub mod events;
pub mod focus;
pub mod input;
pub mod manager;
pub mod math;
pub mod persistence;
pub mod snap;
pub mod surface;
pub mod window;

mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{Breakpoints, ChromeInsets, WmConfig};
pub use device::DeviceClass;
pub use dock::{DockItem, DockState};
pub use error::{WmError, WmResult};
pub use events::{EventBus, SubscriptionId, WmEvent};
pub use focus::{FocusController, FocusHost, FocusRestore};
pub use input::{InputEvent, InputResult, Key, Session, SessionKind};
pub use manager::{WindowManager, WorkspaceSnapshot};
pub use math::{Point, Rect, Size};
pub use persistence::GeometryStore;
pub use snap::SnapTarget;
pub use surface::{HeadlessSurface, Surface};
pub use types::{ElementId, WindowId};
pub use window::{ResizeEdge, Window, WindowDefinition, WindowMode, WindowRegion};

#[cfg(feature = "wasm")]
pub use surface::DomSurface;
