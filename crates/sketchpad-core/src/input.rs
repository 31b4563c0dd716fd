//! Pointer events delivered by the host.
//!
//! Coordinates are already in the surface's logical space.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Host-assigned pointer identifier.
pub type PointerId = u32;

/// Pointer event type for unified mouse/touch/pen handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { pointer_id: PointerId, position: Point },
    Move { pointer_id: PointerId, position: Point },
    /// End events may arrive without a usable position.
    Up { pointer_id: PointerId, position: Option<Point> },
    Leave { pointer_id: PointerId, position: Option<Point> },
    Cancel { pointer_id: PointerId, position: Option<Point> },
}

impl PointerEvent {
    /// The pointer this event belongs to.
    pub fn pointer_id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { pointer_id, .. }
            | PointerEvent::Move { pointer_id, .. }
            | PointerEvent::Up { pointer_id, .. }
            | PointerEvent::Leave { pointer_id, .. }
            | PointerEvent::Cancel { pointer_id, .. } => pointer_id,
        }
    }

    /// The event position, if it carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position, .. } | PointerEvent::Move { position, .. } => {
                Some(position)
            }
            PointerEvent::Up { position, .. }
            | PointerEvent::Leave { position, .. }
            | PointerEvent::Cancel { position, .. } => position,
        }
    }

    /// Whether this event ends a gesture (up, leave or cancel).
    pub fn is_finalizing(&self) -> bool {
        matches!(
            self,
            PointerEvent::Up { .. } | PointerEvent::Leave { .. } | PointerEvent::Cancel { .. }
        )
    }
}

/// What the host should do after a pointer event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResponse {
    /// The event did not affect the pad.
    Ignored,
    /// A gesture started; the host should capture this pointer.
    Captured(PointerId),
    /// The active gesture moved.
    Updated,
    /// The gesture finished; the host should release this pointer.
    Released(PointerId),
}
