//! Shape geometry for the shaped tools.
//!
//! Pure functions from a gesture's start point and current point to the
//! primitive that gets stroked.

use crate::tools::Tool;
use kurbo::{Circle, Line, Point, Rect};

/// A primitive computed from two gesture points, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Segment(Line),
    /// Always normalized (non-negative width and height).
    Rect(Rect),
    Circle(Circle),
}

impl ShapeGeometry {
    /// Whether stroking this shape would leave a zero-size artifact.
    pub fn is_degenerate(&self) -> bool {
        match self {
            ShapeGeometry::Segment(line) => line.p0.distance(line.p1) < f64::EPSILON,
            ShapeGeometry::Rect(rect) => {
                rect.width() < f64::EPSILON && rect.height() < f64::EPSILON
            }
            ShapeGeometry::Circle(circle) => circle.radius < f64::EPSILON,
        }
    }

    /// Bounding box of the unstroked geometry.
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeGeometry::Segment(line) => Rect::from_points(line.p0, line.p1),
            ShapeGeometry::Rect(rect) => *rect,
            ShapeGeometry::Circle(circle) => Rect::new(
                circle.center.x - circle.radius,
                circle.center.y - circle.radius,
                circle.center.x + circle.radius,
                circle.center.y + circle.radius,
            ),
        }
    }
}

/// The segment from `start` to `current`.
pub fn line(start: Point, current: Point) -> ShapeGeometry {
    ShapeGeometry::Segment(Line::new(start, current))
}

/// The axis-aligned rectangle with corners `start` and `current`.
///
/// Dragging up or left yields the same rectangle as the opposite drag.
pub fn rectangle(start: Point, current: Point) -> ShapeGeometry {
    ShapeGeometry::Rect(Rect::from_points(start, current))
}

/// The circle centred on `start` passing through `current`.
pub fn circle(start: Point, current: Point) -> ShapeGeometry {
    ShapeGeometry::Circle(Circle::new(start, start.distance(current)))
}

/// Compute the shape a tool draws between two points.
///
/// Returns `None` for `Tool::Freehand`, which has no parameterized shape.
pub fn shape_between(tool: Tool, start: Point, current: Point) -> Option<ShapeGeometry> {
    match tool {
        Tool::Freehand => None,
        Tool::Line => Some(line(start, current)),
        Tool::Rectangle => Some(rectangle(start, current)),
        Tool::Circle => Some(circle(start, current)),
    }
}
