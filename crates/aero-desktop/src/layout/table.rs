//! Sizing tables for the desktop grid
//!
//! Every number the geometry resolver uses lives here, keyed by
//! `(mode, device class, orientation)` so the whole behavior table can be
//! enumerated in tests.

use super::{DeviceClass, LayoutMode, Orientation};
use crate::math::Size;

/// Viewports narrower than this are treated as compact (phone) devices
pub const COMPACT_BREAKPOINT_PX: f32 = 1024.0;

/// How a mode derives its base cell size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellSizing {
    /// Fixed base dimensions, multiplied by the user scale
    Fixed { width: f32, height: f32 },
    /// Width is `floor(viewport_width / divisor)`, height follows `aspect`
    /// (height / width). Ignores the user scale.
    ViewportFraction { divisor: f32, aspect: f32 },
}

impl CellSizing {
    /// Base cell size before the spacing multiplier
    pub fn base_size(self, viewport_width: f32, scale: f32) -> Size {
        match self {
            CellSizing::Fixed { width, height } => Size::new(width, height).scale(scale),
            CellSizing::ViewportFraction { divisor, aspect } => {
                let width = (viewport_width / divisor.max(1.0)).floor().max(1.0);
                Size::new(width, (width * aspect).floor())
            }
        }
    }
}

/// Base cell sizing for a mode on a given device
pub const fn cell_sizing(
    mode: LayoutMode,
    device: DeviceClass,
    orientation: Orientation,
) -> CellSizing {
    use CellSizing::{Fixed, ViewportFraction};

    match (device, orientation, mode) {
        (DeviceClass::Regular, _, LayoutMode::Compact) => Fixed {
            width: 100.0,
            height: 120.0,
        },
        (DeviceClass::Regular, _, LayoutMode::Card) => Fixed {
            width: 140.0,
            height: 240.0,
        },
        (DeviceClass::Regular, _, LayoutMode::Gallery) => Fixed {
            width: 160.0,
            height: 300.0,
        },

        (DeviceClass::Compact, Orientation::Portrait, LayoutMode::Compact) => Fixed {
            width: 84.0,
            height: 104.0,
        },
        (DeviceClass::Compact, Orientation::Portrait, LayoutMode::Card) => Fixed {
            width: 120.0,
            height: 200.0,
        },
        (DeviceClass::Compact, Orientation::Portrait, LayoutMode::Gallery) => Fixed {
            width: 128.0,
            height: 240.0,
        },

        (DeviceClass::Compact, Orientation::Landscape, LayoutMode::Compact) => Fixed {
            width: 84.0,
            height: 104.0,
        },
        (DeviceClass::Compact, Orientation::Landscape, LayoutMode::Card) => {
            ViewportFraction { divisor: 5.0, aspect: 4.0 / 3.0 }
        }
        (DeviceClass::Compact, Orientation::Landscape, LayoutMode::Gallery) => {
            ViewportFraction { divisor: 5.0, aspect: 16.0 / 9.0 }
        }
    }
}

/// Margins and the strip reserved for fixed chrome (taskbar, page dots)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub margin_x: f32,
    pub margin_y: f32,
    pub bottom_reserve: f32,
}

/// Insets for a device class and orientation
pub const fn insets(device: DeviceClass, orientation: Orientation) -> Insets {
    match (device, orientation) {
        (DeviceClass::Regular, Orientation::Landscape) => Insets {
            margin_x: 32.0,
            margin_y: 32.0,
            bottom_reserve: 48.0,
        },
        (DeviceClass::Regular, Orientation::Portrait) => Insets {
            margin_x: 32.0,
            margin_y: 48.0,
            bottom_reserve: 48.0,
        },
        (DeviceClass::Compact, Orientation::Portrait) => Insets {
            margin_x: 16.0,
            margin_y: 24.0,
            bottom_reserve: 72.0,
        },
        (DeviceClass::Compact, Orientation::Landscape) => Insets {
            margin_x: 24.0,
            margin_y: 12.0,
            bottom_reserve: 40.0,
        },
    }
}

/// Multiplier applied to the base cell so neighbours never touch
///
/// Grows with scale on regular devices; constant on compact ones.
#[inline]
pub fn spacing_factor(device: DeviceClass, scale: f32) -> f32 {
    match device {
        DeviceClass::Regular => 1.05 + 0.025 * scale,
        DeviceClass::Compact => 1.1,
    }
}

/// Fixed `(cols, rows)` override, if this combination has one
///
/// Compact landscape cards and gallery tiles are sized to fit exactly four
/// across; reflowing them freely degenerates at a single row.
pub const fn forced_grid(
    mode: LayoutMode,
    device: DeviceClass,
    orientation: Orientation,
) -> Option<(usize, usize)> {
    match (device, orientation, mode) {
        (DeviceClass::Compact, Orientation::Landscape, LayoutMode::Card | LayoutMode::Gallery) => {
            Some((4, 1))
        }
        _ => None,
    }
}
