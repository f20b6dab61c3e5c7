//! Drop-zone model for tab drag-and-drop
//!
//! This module provides a pure data model for classifying a pointer position
//! over a tab host into one of five zones, allowing property-based testing
//! without any windowing toolkit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Region of a tab host a dragged tab was released over
///
/// Edge zones split the host in that direction; the center adds the tab to
/// the host's group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropZone {
    /// Left edge: new host before the target, in a row
    Left,
    /// Right edge: new host after the target, in a row
    Right,
    /// Top edge: new host before the target, in a column
    Top,
    /// Bottom edge: new host after the target, in a column
    Bottom,
    /// Anywhere else: join the target group
    #[default]
    Center,
}

impl DropZone {
    /// All zones, edges first
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Top, Self::Bottom, Self::Center];

    /// Maps a zone name to a zone, falling back to `Center` for unknown names
    #[must_use]
    pub fn from_side(side: &str) -> Self {
        side.parse().unwrap_or(Self::Center)
    }

    /// Returns the lowercase zone name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }

    /// Returns true for the four edge zones
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !matches!(self, Self::Center)
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropZone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(()),
        }
    }
}

/// Configuration for drop zone classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZoneConfig {
    /// Fraction of the width (or height) covered by each edge band
    pub edge_ratio: f64,
}

impl DropZoneConfig {
    /// Default edge band ratio
    pub const DEFAULT_EDGE_RATIO: f64 = 0.2;
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            edge_ratio: Self::DEFAULT_EDGE_RATIO,
        }
    }
}

/// Classifies the pointer position within a rectangle into a drop zone
///
/// The rectangle is divided into edge bands of `edge_ratio` of its size,
/// checked in order:
/// - Left band `[0, ratio * width]`: Left
/// - Right band `[(1 - ratio) * width, width]`: Right
/// - Top band `[0, ratio * height]`: Top
/// - Bottom band `[(1 - ratio) * height, height]`: Bottom
///
/// Anything else, including points outside the rectangle and degenerate
/// rectangles, is Center.
///
/// # Arguments
/// * `x`, `y` - Pointer position relative to the top-left corner
/// * `width`, `height` - Size of the target rectangle
/// * `config` - Classification configuration
#[must_use]
pub fn classify_drop_zone(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    config: &DropZoneConfig,
) -> DropZone {
    let inside = (0.0..=width).contains(&x) && (0.0..=height).contains(&y);
    if !inside || width <= 0.0 || height <= 0.0 {
        return DropZone::Center;
    }

    let band_x = width * config.edge_ratio;
    let band_y = height * config.edge_ratio;

    if x <= band_x {
        DropZone::Left
    } else if x >= width - band_x {
        DropZone::Right
    } else if y <= band_y {
        DropZone::Top
    } else if y >= height - band_y {
        DropZone::Bottom
    } else {
        DropZone::Center
    }
}

/// Pointer-to-zone classification used when routing drops
///
/// Hosts with their own hit-testing can implement this instead of using
/// [`DropZoneConfig`].
pub trait ZoneClassifier {
    /// Classifies the point `(x, y)` within a `width` by `height` rectangle
    fn classify(&self, x: f64, y: f64, width: f64, height: f64) -> DropZone;
}

impl ZoneClassifier for DropZoneConfig {
    fn classify(&self, x: f64, y: f64, width: f64, height: f64) -> DropZone {
        classify_drop_zone(x, y, width, height, self)
    }
}
