//! Visual surface abstraction
//!
//! The manager never touches the DOM directly. Everything it needs from the
//! page (element bounds, stacking, visibility, keyboard focus) goes through
//! [`Surface`], so the core runs unchanged in tests and non-browser hosts.
//!
//! - [`HeadlessSurface`]: in-memory surface for tests
//! - `DomSurface` (feature `wasm`): drives real DOM elements

mod headless;

#[cfg(feature = "wasm")]
mod dom;

pub use headless::{HeadlessSurface, FALLBACK_ELEMENT};

#[cfg(feature = "wasm")]
pub use dom::DomSurface;

use crate::focus::FocusHost;
use crate::math::{Rect, Size};

/// Host surface the windows are drawn on
pub trait Surface: FocusHost {
    /// Current on-screen bounds of a window element, if it exists and has
    /// a layout
    fn get_bounds(&self, window_id: &str) -> Option<Rect>;

    /// Position and size a window element
    fn set_bounds(&mut self, window_id: &str, bounds: Rect);

    /// Size of the desktop surface
    fn viewport_size(&self) -> Size;

    /// Stacking order of a window element
    fn set_z_index(&mut self, window_id: &str, z_index: u64);

    /// Show or hide a window element
    fn set_visible(&mut self, window_id: &str, visible: bool);
}
