//! Drawing tools.

use serde::{Deserialize, Serialize};

/// Available tools. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Append-only pen stroke following the pointer.
    #[default]
    Freehand,
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    /// All tools, in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Freehand, Tool::Line, Tool::Rectangle, Tool::Circle];

    /// Whether this tool draws a parameterized shape with a live preview.
    pub fn is_shaped(self) -> bool {
        !matches!(self, Tool::Freehand)
    }

    /// Display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Freehand => "Freehand",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }
}
