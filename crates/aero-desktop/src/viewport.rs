//! Viewport of the desktop surface

use serde::Serialize;

use crate::math::Size;

/// Which screen edge a pointer is near
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Left,
    Right,
}

/// Current surface dimensions
///
/// Dimensions are clamped to at least 1px on every write, so nothing
/// downstream has to guard against zero or negative sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Size::new(width, height).at_least(1.0) }
    }

    /// Current (clamped) size
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Apply a resize notification; returns true if the size changed
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let size = Size::new(width, height).at_least(1.0);
        let changed = size != self.size;
        self.size = size;
        changed
    }

    /// Edge zone containing the pointer x-coordinate, if any
    ///
    /// On a viewport narrower than two zones the left edge wins.
    pub fn edge_at(&self, x: f32, threshold: f32) -> Option<EdgeSide> {
        if x < threshold {
            Some(EdgeSide::Left)
        } else if x > self.size.width - threshold {
            Some(EdgeSide::Right)
        } else {
            None
        }
    }
}
