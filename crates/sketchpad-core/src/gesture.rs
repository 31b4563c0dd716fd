//! Pointer gesture state machine.
//!
//! A gesture runs from pointerdown to pointerup/leave/cancel. Freehand strokes
//! commit pixels on every move. Shaped tools keep a snapshot of the buffer
//! taken at pointerdown and redraw their preview on top of it, so the buffer
//! after any number of moves only depends on the last position.

use crate::geometry::shape_between;
use crate::input::{PointerEvent, PointerId, PointerResponse};
use crate::surface::{RasterSurface, Sheet};
use crate::tools::Tool;
use kurbo::Point;

/// State of the gesture engine.
pub enum GestureState<P> {
    /// Waiting for a pointerdown.
    Idle,
    /// A pointer is down and drawing.
    Drawing {
        /// The pointer that owns this gesture.
        pointer_id: PointerId,
        /// Tool captured at pointerdown.
        tool: Tool,
        start: Point,
        last: Point,
        /// Buffer contents at pointerdown, used to erase shape previews.
        /// Always `None` for freehand.
        preview: Option<P>,
        /// Whether a freehand segment has been stroked.
        drew: bool,
    },
}

impl<P> Default for GestureState<P> {
    fn default() -> Self {
        GestureState::Idle
    }
}

impl<P> std::fmt::Debug for GestureState<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureState::Idle => f.write_str("Idle"),
            GestureState::Drawing {
                pointer_id,
                tool,
                start,
                last,
                preview,
                drew,
            } => f
                .debug_struct("Drawing")
                .field("pointer_id", pointer_id)
                .field("tool", tool)
                .field("start", start)
                .field("last", last)
                .field("has_preview", &preview.is_some())
                .field("drew", drew)
                .finish(),
        }
    }
}

/// Manages the selected tool and the active gesture.
pub struct GestureEngine<S: RasterSurface> {
    tool: Tool,
    state: GestureState<S::Snapshot>,
}

impl<S: RasterSurface> Default for GestureEngine<S> {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            state: GestureState::Idle,
        }
    }
}

impl<S: RasterSurface> GestureEngine<S> {
    /// Create an idle engine with the default tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tool future gestures will use.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select the tool for future gestures.
    ///
    /// An active gesture keeps the tool it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if let GestureState::Drawing { tool: active, .. } = &self.state {
            if *active != tool {
                log::debug!(
                    "Tool switched to {} mid-gesture; {} stays active until release",
                    tool.name(),
                    active.name()
                );
            }
        }
        self.tool = tool;
    }

    pub fn state(&self) -> &GestureState<S::Snapshot> {
        &self.state
    }

    /// Check if a gesture is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// The pointer owning the active gesture.
    pub fn active_pointer(&self) -> Option<PointerId> {
        match self.state {
            GestureState::Drawing { pointer_id, .. } => Some(pointer_id),
            GestureState::Idle => None,
        }
    }

    /// Dispatch a pointer event.
    pub fn handle(&mut self, sheet: &mut Sheet<S>, event: PointerEvent) -> PointerResponse {
        match event {
            PointerEvent::Down {
                pointer_id,
                position,
            } => self.pointer_down(sheet, pointer_id, position),
            PointerEvent::Move {
                pointer_id,
                position,
            } => self.pointer_move(sheet, pointer_id, position),
            PointerEvent::Up {
                pointer_id,
                position,
            }
            | PointerEvent::Leave {
                pointer_id,
                position,
            }
            | PointerEvent::Cancel {
                pointer_id,
                position,
            } => self.finish(sheet, pointer_id, position),
        }
    }

    /// Begin a gesture.
    ///
    /// Pushes an undo entry for the pre-gesture buffer. A second pointerdown
    /// while a gesture is active is ignored.
    pub fn pointer_down(
        &mut self,
        sheet: &mut Sheet<S>,
        pointer_id: PointerId,
        position: Point,
    ) -> PointerResponse {
        if let Some(active) = self.active_pointer() {
            log::debug!(
                "Ignoring pointerdown from {} while pointer {} is drawing",
                pointer_id,
                active
            );
            return PointerResponse::Ignored;
        }

        sheet.checkpoint();

        let tool = self.tool;
        let preview = if tool.is_shaped() {
            match sheet.surface.snapshot() {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    log::warn!("{} preview will not erase: {}", tool.name(), e);
                    None
                }
            }
        } else {
            None
        };

        self.state = GestureState::Drawing {
            pointer_id,
            tool,
            start: position,
            last: position,
            preview,
            drew: false,
        };
        PointerResponse::Captured(pointer_id)
    }

    /// Extend a freehand stroke or redraw a shape preview.
    pub fn pointer_move(
        &mut self,
        sheet: &mut Sheet<S>,
        pointer_id: PointerId,
        position: Point,
    ) -> PointerResponse {
        let GestureState::Drawing {
            pointer_id: active,
            tool,
            start,
            last,
            preview,
            drew,
        } = &mut self.state
        else {
            return PointerResponse::Ignored;
        };
        if *active != pointer_id {
            return PointerResponse::Ignored;
        }

        let previous = std::mem::replace(last, position);
        match *tool {
            Tool::Freehand => {
                if previous != position {
                    sheet.surface.stroke_segment(previous, position);
                    *drew = true;
                    sheet.has_content = true;
                }
            }
            shaped => {
                if let Some(snapshot) = preview {
                    sheet.surface.restore(snapshot);
                }
                if let Some(shape) = shape_between(shaped, *start, position) {
                    if !shape.is_degenerate() {
                        sheet.surface.stroke_shape(&shape);
                    }
                }
            }
        }
        PointerResponse::Updated
    }

    /// Finalize the gesture on pointerup, pointerleave or pointercancel.
    ///
    /// Always returns to `Idle` for the owning pointer; spurious events are
    /// ignored.
    pub fn finish(
        &mut self,
        sheet: &mut Sheet<S>,
        pointer_id: PointerId,
        position: Option<Point>,
    ) -> PointerResponse {
        match self.active_pointer() {
            Some(active) if active == pointer_id => {}
            _ => return PointerResponse::Ignored,
        }

        let GestureState::Drawing {
            tool,
            start,
            last,
            preview,
            drew,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return PointerResponse::Ignored;
        };
        let end = position.unwrap_or(last);

        match tool {
            Tool::Freehand => {
                if drew {
                    sheet.has_content = true;
                }
            }
            shaped => {
                if let Some(snapshot) = &preview {
                    sheet.surface.restore(snapshot);
                }
                if let Some(shape) = shape_between(shaped, start, end) {
                    if shape.is_degenerate() {
                        log::debug!("Skipping degenerate {}", shaped.name());
                    } else {
                        sheet.surface.stroke_shape(&shape);
                        sheet.has_content = true;
                    }
                }
            }
        }
        PointerResponse::Released(pointer_id)
    }

    /// Drop the active gesture without drawing anything.
    ///
    /// Returns the pointer that should be released.
    pub fn abandon(&mut self) -> Option<PointerId> {
        let pointer = self.active_pointer();
        self.state = GestureState::Idle;
        pointer
    }
}
