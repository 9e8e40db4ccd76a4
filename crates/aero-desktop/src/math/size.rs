//! 2D size type for viewport and cell dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Raise both dimensions to at least `min`
    ///
    /// Non-finite dimensions collapse to `min` as well, so the result is
    /// always safe to divide by.
    #[inline]
    pub fn at_least(self, min: f32) -> Self {
        let fix = |v: f32| if v.is_finite() { v.max(min) } else { min };
        Self::new(fix(self.width), fix(self.height))
    }

    /// Landscape when strictly wider than tall
    #[inline]
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    /// Scale both dimensions
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_at_least() {
        let s = Size::new(0.0, -20.0).at_least(1.0);
        assert!((s.width - 1.0).abs() < 0.001);
        assert!((s.height - 1.0).abs() < 0.001);

        let s = Size::new(f32::NAN, 800.0).at_least(1.0);
        assert!((s.width - 1.0).abs() < 0.001);
        assert!((s.height - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_size_orientation() {
        assert!(Size::new(1920.0, 1080.0).is_landscape());
        assert!(!Size::new(390.0, 844.0).is_landscape());
        // Square counts as portrait
        assert!(!Size::new(800.0, 800.0).is_landscape());
    }

    #[test]
    fn test_size_scale() {
        let s = Size::new(100.0, 120.0).scale(1.5);
        assert!((s.width - 150.0).abs() < 0.001);
        assert!((s.height - 180.0).abs() < 0.001);
    }
}
