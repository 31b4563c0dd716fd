//! Sketchpad Render Library
//!
//! CPU raster surface for the sketch pad, built on tiny-skia, plus PNG
//! export of the buffer.

mod encode;
mod surface;

pub use encode::encode_rgba_png;
pub use surface::{PixmapSnapshot, PixmapSurface};

/// A sketch pad drawing into a tiny-skia pixmap.
pub type RasterPad = sketchpad_core::SketchPad<PixmapSurface>;
