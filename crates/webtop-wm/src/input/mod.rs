//! Input handling
//!
//! - [`InputEvent`] / [`InputResult`]: inbound host events and whether the
//!   manager consumed them
//! - [`Session`]: the drag/resize state machine for one pointer gesture

mod event;
mod session;

pub use event::{InputEvent, InputResult, Key};
pub use session::{calculate_resize, Session, SessionKind};
