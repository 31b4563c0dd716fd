//! The sketch pad: the in-process contract with the hosting UI.
//!
//! The host forwards resize notifications, pointer events and the clear /
//! undo / tool commands, and reads back `PadStatus` to enable or disable its
//! controls.

use crate::config::SketchConfig;
use crate::error::{ExportError, ImportError, ResizeError};
use crate::gesture::GestureEngine;
use crate::input::{PointerEvent, PointerId, PointerResponse};
use crate::surface::{ImageOrigin, RasterSurface, Sheet, SurfaceSpec};
use crate::tools::Tool;
use kurbo::{Point, Size};

/// Host-observable state, refreshed after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadStatus {
    /// The surface is not known to be empty.
    pub has_content: bool,
    /// At least one undo entry is stored.
    pub can_undo: bool,
    /// A gesture is in progress.
    pub drawing: bool,
}

/// Pointer-driven raster drawing surface with bounded undo.
///
/// Nothing is drawable until the first successful `on_resize` mounts a
/// surface.
pub struct SketchPad<S: RasterSurface> {
    config: SketchConfig,
    sheet: Option<Sheet<S>>,
    gestures: GestureEngine<S>,
}

impl<S: RasterSurface> Default for SketchPad<S> {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl<S: RasterSurface> SketchPad<S> {
    /// Create an unmounted pad.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            sheet: None,
            gestures: GestureEngine::new(),
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// The mounted surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.sheet.as_ref().map(|sheet| &sheet.surface)
    }

    /// Number of stored undo entries.
    pub fn undo_depth(&self) -> usize {
        self.sheet.as_ref().map_or(0, |sheet| sheet.history.len())
    }

    /// Reallocate the surface for a new container size or device scale.
    ///
    /// On success the buffer is cleared, undo history is dropped, the content
    /// flag resets and any active gesture is abandoned. On failure the
    /// previous surface and history are kept.
    pub fn on_resize(&mut self, width: f64, height: f64, scale: f64) -> Result<(), ResizeError> {
        let surface = SurfaceSpec::new(Size::new(width, height), scale, self.config.max_dimension)
            .and_then(|spec| S::allocate(spec, &self.config.stroke))
            .inspect_err(|e| log::warn!("Ignoring resize: {}", e))?;

        if let Some(pointer) = self.gestures.abandon() {
            log::debug!("Resize abandoned the gesture of pointer {}", pointer);
        }

        let spec = surface.spec();
        log::info!(
            "Surface resized to {}x{} logical ({}x{} physical)",
            spec.logical.width,
            spec.logical.height,
            spec.width,
            spec.height
        );
        self.sheet = Some(Sheet::new(surface));
        Ok(())
    }

    /// Process a pointer event. Ignored while no surface is mounted.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        match self.sheet.as_mut() {
            Some(sheet) => self.gestures.handle(sheet, event),
            None => {
                log::debug!("Ignoring {:?} before mount", event);
                PointerResponse::Ignored
            }
        }
    }

    pub fn on_pointer_down(&mut self, pointer_id: PointerId, x: f64, y: f64) -> PointerResponse {
        self.handle_pointer(PointerEvent::Down {
            pointer_id,
            position: Point::new(x, y),
        })
    }

    pub fn on_pointer_move(&mut self, pointer_id: PointerId, x: f64, y: f64) -> PointerResponse {
        self.handle_pointer(PointerEvent::Move {
            pointer_id,
            position: Point::new(x, y),
        })
    }

    pub fn on_pointer_up(&mut self, pointer_id: PointerId, x: f64, y: f64) -> PointerResponse {
        self.handle_pointer(PointerEvent::Up {
            pointer_id,
            position: Some(Point::new(x, y)),
        })
    }

    pub fn on_pointer_leave(&mut self, pointer_id: PointerId, x: f64, y: f64) -> PointerResponse {
        self.handle_pointer(PointerEvent::Leave {
            pointer_id,
            position: Some(Point::new(x, y)),
        })
    }

    pub fn on_pointer_cancel(&mut self, pointer_id: PointerId, x: f64, y: f64) -> PointerResponse {
        self.handle_pointer(PointerEvent::Cancel {
            pointer_id,
            position: Some(Point::new(x, y)),
        })
    }

    /// Select the tool for the next gesture.
    pub fn select_tool(&mut self, tool: Tool) {
        self.gestures.set_tool(tool);
    }

    pub fn tool(&self) -> Tool {
        self.gestures.tool()
    }

    /// Clear the surface as an undoable mutation.
    ///
    /// Returns false if nothing happened (unmounted, or a gesture is active).
    pub fn clear(&mut self) -> bool {
        let Some(sheet) = self.active_sheet("clear") else {
            return false;
        };
        sheet.checkpoint();
        sheet.surface.clear();
        sheet.has_content = false;
        true
    }

    /// Restore the most recent undo entry.
    ///
    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.active_sheet("undo").is_some_and(|sheet| sheet.undo())
    }

    /// Draw an uploaded PNG onto the surface as an undoable mutation.
    ///
    /// Cross-origin pictures taint the surface: snapshots and exports fail
    /// until the next resize.
    pub fn load_image(&mut self, encoded: &[u8], origin: ImageOrigin) -> Result<(), ImportError> {
        if self.sheet.is_none() {
            return Err(ImportError::NotMounted);
        }
        let Some(sheet) = self.active_sheet("load image") else {
            return Err(ImportError::Busy);
        };

        let checkpointed = sheet.checkpoint();
        if let Err(e) = sheet.surface.draw_image(encoded, origin) {
            if checkpointed {
                sheet.history.pop();
            }
            return Err(e);
        }
        sheet.has_content = true;
        if origin == ImageOrigin::CrossOrigin {
            log::info!("Cross-origin image loaded; surface is no longer readable");
        }
        Ok(())
    }

    /// Encode the current buffer as a PNG for the host.
    pub fn export_raster(&self) -> Result<Vec<u8>, ExportError> {
        self.sheet
            .as_ref()
            .ok_or(ExportError::NotMounted)?
            .surface
            .encode_png()
    }

    pub fn has_content(&self) -> bool {
        self.sheet.as_ref().is_some_and(|sheet| sheet.has_content)
    }

    pub fn can_undo(&self) -> bool {
        self.sheet.as_ref().is_some_and(|sheet| sheet.history.can_undo())
    }

    pub fn is_drawing(&self) -> bool {
        self.gestures.is_drawing()
    }

    pub fn status(&self) -> PadStatus {
        PadStatus {
            has_content: self.has_content(),
            can_undo: self.can_undo(),
            drawing: self.is_drawing(),
        }
    }

    /// The mounted sheet, unless a gesture is in progress.
    fn active_sheet(&mut self, command: &str) -> Option<&mut Sheet<S>> {
        if self.gestures.is_drawing() {
            log::debug!("Ignoring {} during an active gesture", command);
            return None;
        }
        self.sheet.as_mut()
    }
}
