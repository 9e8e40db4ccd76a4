//! Layout density modes and viewport classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::table::COMPACT_BREAKPOINT_PX;
use crate::math::Size;

/// Visual density preset controlling base cell dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Small square icons with a caption
    #[default]
    #[serde(alias = "icon")]
    Compact,
    /// Portrait cards (3:4 artwork)
    Card,
    /// Tall gallery tiles (9:16 artwork)
    Gallery,
}

impl LayoutMode {
    /// Every mode, in menu order
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Compact, LayoutMode::Card, LayoutMode::Gallery];

    /// Stable storage/host name
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Card => "card",
            LayoutMode::Gallery => "gallery",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised layout mode name
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown layout mode `{0}`")]
pub struct UnknownLayoutMode(pub String);

impl FromStr for LayoutMode {
    type Err = UnknownLayoutMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            // "icon" is the name older builds stored
            "compact" | "icon" => Ok(LayoutMode::Compact),
            "card" => Ok(LayoutMode::Card),
            "gallery" => Ok(LayoutMode::Gallery),
            other => Err(UnknownLayoutMode(other.to_string())),
        }
    }
}

/// Device class derived from viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Phone-sized surface
    Compact,
    /// Tablet/desktop-sized surface
    Regular,
}

impl DeviceClass {
    /// Classify a viewport width against the breakpoint
    #[inline]
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            DeviceClass::Compact
        } else {
            DeviceClass::Regular
        }
    }
}

/// Viewport orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape when strictly wider than tall
    #[inline]
    pub fn of(size: Size) -> Self {
        if size.is_landscape() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("compact".parse::<LayoutMode>(), Ok(LayoutMode::Compact));
        assert_eq!("icon".parse::<LayoutMode>(), Ok(LayoutMode::Compact));
        assert_eq!(" card ".parse::<LayoutMode>(), Ok(LayoutMode::Card));
        assert_eq!("gallery".parse::<LayoutMode>(), Ok(LayoutMode::Gallery));
        assert_eq!(
            "list".parse::<LayoutMode>(),
            Err(UnknownLayoutMode("list".to_string()))
        );
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&LayoutMode::Gallery).unwrap();
        assert_eq!(json, "\"gallery\"");

        let legacy: LayoutMode = serde_json::from_str("\"icon\"").unwrap();
        assert_eq!(legacy, LayoutMode::Compact);
    }

    #[test]
    fn test_mode_display_round_trips_through_parse() {
        for mode in LayoutMode::ALL {
            assert_eq!(mode.to_string().parse::<LayoutMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_device_class_breakpoint() {
        assert_eq!(DeviceClass::from_width(390.0), DeviceClass::Compact);
        assert_eq!(DeviceClass::from_width(932.0), DeviceClass::Compact);
        assert_eq!(DeviceClass::from_width(1023.9), DeviceClass::Compact);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Regular);
        assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Regular);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::of(Size::new(844.0, 390.0)), Orientation::Landscape);
        assert_eq!(Orientation::of(Size::new(390.0, 844.0)), Orientation::Portrait);
    }
}
