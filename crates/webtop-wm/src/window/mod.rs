//! Window model
//!
//! Windows are created from static [`WindowDefinition`]s the first time they
//! are opened and are never destroyed, only cycled through [`WindowMode`]s.

mod definition;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use definition::WindowDefinition;
pub use region::{ResizeEdge, WindowRegion};
pub use window::{Window, WindowMode};

pub use crate::types::WindowId;
