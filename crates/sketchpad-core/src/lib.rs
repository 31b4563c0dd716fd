//! Sketchpad Core Library
//!
//! Platform-agnostic logic for the sketch surface: the pointer gesture state
//! machine, shape geometry for the shaped tools and the bounded undo history.
//! Rasterization lives behind the `RasterSurface` trait.

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod input;
pub mod pad;
pub mod surface;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::{Rgba8, SketchConfig, StrokeStyle};
pub use error::{CaptureError, ExportError, ImportError, ResizeError};
pub use geometry::{ShapeGeometry, shape_between};
pub use gesture::{GestureEngine, GestureState};
pub use history::{UNDO_CAPACITY, UndoEntry, UndoStore};
pub use input::{PointerEvent, PointerId, PointerResponse};
pub use pad::{PadStatus, SketchPad};
pub use surface::{ImageOrigin, RasterSurface, Sheet, SurfaceSpec};
pub use tools::Tool;
