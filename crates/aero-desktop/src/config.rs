//! Layout and drag configuration

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMode;

/// Smallest allowed item scale
pub const MIN_SCALE: f32 = 0.4;
/// Largest allowed item scale
pub const MAX_SCALE: f32 = 3.0;
/// Scale change per ctrl+wheel notch
pub const WHEEL_SCALE_STEP: f32 = 0.05;

/// Persisted layout settings
///
/// The current page is deliberately not part of this; it resets to 0 on
/// every boot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { mode: LayoutMode::default(), scale: 1.0 }
    }
}

impl LayoutConfig {
    /// Create a config, clamping the scale
    pub fn new(mode: LayoutMode, scale: f32) -> Self {
        let mut config = Self { mode, ..Default::default() };
        config.set_scale(scale);
        config
    }

    /// Current scale, always within `[MIN_SCALE, MAX_SCALE]`
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the scale, clamped to `[MIN_SCALE, MAX_SCALE]`
    ///
    /// Non-finite values are ignored. Returns true if the stored scale changed.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        let changed = (clamped - self.scale).abs() > f32::EPSILON;
        self.scale = clamped;
        changed
    }
}

/// Scale presets offered by the desktop menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePreset {
    Tiny,
    Standard,
    Big,
}

impl ScalePreset {
    /// Every preset, smallest first
    pub const ALL: [ScalePreset; 3] = [ScalePreset::Tiny, ScalePreset::Standard, ScalePreset::Big];

    /// Scale value of the preset
    pub fn scale(self) -> f32 {
        match self {
            ScalePreset::Tiny => 0.7,
            ScalePreset::Standard => 1.0,
            ScalePreset::Big => 1.4,
        }
    }

    /// Preset label for an arbitrary scale
    pub fn nearest(scale: f32) -> Self {
        if scale < 0.9 {
            ScalePreset::Tiny
        } else if scale < 1.2 {
            ScalePreset::Standard
        } else {
            ScalePreset::Big
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            ScalePreset::Tiny => "TINY",
            ScalePreset::Standard => "STD",
            ScalePreset::Big => "BIG",
        }
    }
}

/// Edge-drag page navigation tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    /// Width of the left/right edge zones in pixels
    pub edge_threshold_px: f32,
    /// How long the pointer must stay in a zone before the page flips
    pub dwell_ms: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { edge_threshold_px: 60.0, dwell_ms: 600.0 }
    }
}
