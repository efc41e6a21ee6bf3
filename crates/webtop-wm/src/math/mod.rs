//! Core geometry types for the window manager
//!
//! Coordinates are CSS pixels relative to the desktop surface, origin at the
//! top-left corner, y growing downwards.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
