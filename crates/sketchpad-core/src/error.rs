//! Error types for surface operations.
//!
//! None of these are fatal: capture failures only cost the affected gesture
//! its undo entry, and a rejected resize leaves the previous surface in place.

use thiserror::Error;

/// The surface buffer could not be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The buffer holds pixels from a cross-origin image.
    #[error("surface is tainted by cross-origin content")]
    Tainted,
}

/// A resize request that cannot be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResizeError {
    #[error("invalid logical size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("invalid device scale {0}")]
    InvalidScale(f64),
    #[error("physical size {width}x{height} exceeds the limit of {max} pixels per side")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("failed to allocate a {width}x{height} buffer")]
    Allocation { width: u32, height: u32 },
}

/// Errors from `SketchPad::export_raster`.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no surface is mounted")]
    NotMounted,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Errors from `SketchPad::load_image`.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no surface is mounted")]
    NotMounted,
    #[error("a gesture is in progress")]
    Busy,
    #[error("decoding failed: {0}")]
    Decode(String),
}
