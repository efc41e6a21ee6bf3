//! Core type definitions for the window manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Stable window identifier
///
/// Identifies a window *definition* (`"about"`, `"terminal"`), not an open
/// instance: reopening a window reuses its id.
pub type WindowId = String;

/// Identifier of a focusable element on the host surface
///
/// For the DOM surface this is the element's `id` attribute.
pub type ElementId = String;
