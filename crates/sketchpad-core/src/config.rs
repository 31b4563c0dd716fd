//! Sketch pad configuration.

use serde::{Deserialize, Serialize};

/// Default stroke width in logical pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Default limit for either physical side of the surface.
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Straight-alpha RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::black()
    }
}

/// Stroke applied to every freehand path and shape outline.
///
/// Cap and join are always round; only color and width are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Rgba8,
    /// Width in logical pixels.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::black(),
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Configuration for a `SketchPad`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub stroke: StrokeStyle,
    /// Largest physical width or height a resize may request.
    pub max_dimension: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl SketchConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
