//! Core geometry types for the desktop surface
//!
//! Pointer positions, drag displacements, item anchors and viewport/cell
//! dimensions are all expressed in CSS pixels of the desktop surface.

mod vec2;
mod size;

pub use vec2::Vec2;
pub use size::Size;
