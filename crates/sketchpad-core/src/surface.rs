//! Raster surface abstraction.
//!
//! The gesture engine only talks to the buffer through `RasterSurface`, so
//! the same state machine drives the tiny-skia surface in production and a
//! grid surface in tests.

use crate::config::StrokeStyle;
use crate::error::{CaptureError, ExportError, ImportError, ResizeError};
use crate::geometry::ShapeGeometry;
use crate::history::{UndoEntry, UndoStore};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Where an imported picture came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageOrigin {
    /// Same-origin content; the buffer stays readable.
    #[default]
    Local,
    /// Cross-origin content; the buffer becomes unreadable until the next resize.
    CrossOrigin,
}

/// Validated dimensions for a surface allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    /// Size in logical (CSS) pixels.
    pub logical: Size,
    /// Device pixel ratio.
    pub scale: f64,
    /// Buffer width in physical pixels.
    pub width: u32,
    /// Buffer height in physical pixels.
    pub height: u32,
}

impl SurfaceSpec {
    /// Validate a resize request and compute the physical buffer size.
    pub fn new(logical: Size, scale: f64, max_dimension: u32) -> Result<Self, ResizeError> {
        if !logical.is_finite() || logical.width <= 0.0 || logical.height <= 0.0 {
            return Err(ResizeError::InvalidSize {
                width: logical.width,
                height: logical.height,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ResizeError::InvalidScale(scale));
        }

        let physical_w = (logical.width * scale).round();
        let physical_h = (logical.height * scale).round();
        if physical_w < 1.0 || physical_h < 1.0 {
            return Err(ResizeError::InvalidSize {
                width: logical.width,
                height: logical.height,
            });
        }

        let max = f64::from(max_dimension);
        if physical_w > max || physical_h > max {
            return Err(ResizeError::TooLarge {
                width: physical_w.min(f64::from(u32::MAX)) as u32,
                height: physical_h.min(f64::from(u32::MAX)) as u32,
                max: max_dimension,
            });
        }

        Ok(Self {
            logical,
            scale,
            width: physical_w as u32,
            height: physical_h as u32,
        })
    }
}

/// A pixel buffer with drawing primitives in logical coordinates.
///
/// Drawing primitives never touch undo history; the gesture engine and the
/// pad decide when snapshots are taken.
pub trait RasterSurface: Sized {
    /// Immutable full copy of the buffer.
    type Snapshot;

    /// Allocate a cleared buffer with the stroke style applied.
    fn allocate(spec: SurfaceSpec, style: &StrokeStyle) -> Result<Self, ResizeError>;

    /// The dimensions this surface was allocated with.
    fn spec(&self) -> SurfaceSpec;

    /// Copy the whole buffer.
    fn snapshot(&self) -> Result<Self::Snapshot, CaptureError>;

    /// Overwrite the whole buffer with a snapshot. No blending.
    fn restore(&mut self, snapshot: &Self::Snapshot);

    /// Set every pixel to fully transparent.
    fn clear(&mut self);

    /// Stroke one freehand segment.
    fn stroke_segment(&mut self, from: Point, to: Point);

    /// Stroke the outline of a shape.
    fn stroke_shape(&mut self, shape: &ShapeGeometry);

    /// Decode a PNG and draw it scaled to fit, centred.
    fn draw_image(&mut self, encoded: &[u8], origin: ImageOrigin) -> Result<(), ImportError>;

    /// Encode the buffer as a lossless PNG.
    fn encode_png(&self) -> Result<Vec<u8>, ExportError>;
}

/// A mounted surface together with the state that is only valid for it.
///
/// Replacing the sheet on resize drops the old buffer, its undo history and
/// the content flag in one step.
pub struct Sheet<S: RasterSurface> {
    pub surface: S,
    pub history: UndoStore<S::Snapshot>,
    pub has_content: bool,
}

impl<S: RasterSurface> Sheet<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            history: UndoStore::new(),
            has_content: false,
        }
    }

    /// Push an undo entry for the current buffer.
    ///
    /// A failed capture is logged and leaves the history untouched; the
    /// following mutation is then not undoable.
    pub fn checkpoint(&mut self) -> bool {
        match self.surface.snapshot() {
            Ok(snapshot) => {
                let entry = UndoEntry::new(snapshot, self.has_content);
                if self.history.push(entry).is_some() {
                    log::debug!("Undo history full, dropped oldest entry");
                }
                true
            }
            Err(e) => {
                log::warn!("Skipping undo checkpoint: {}", e);
                false
            }
        }
    }

    /// Restore the most recent undo entry. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        if let Some(entry) = self.history.pop() {
            self.surface.restore(&entry.snapshot);
            self.has_content = entry.has_content;
            true
        } else {
            false
        }
    }
}
