//! Replay scripts: a JSON array of host calls applied to a sketch pad.
//!
//! ```json
//! [
//!   {"op": "resize", "width": 200, "height": 150, "scale": 2.0},
//!   {"op": "tool", "tool": "rectangle"},
//!   {"op": "down", "pointer": 1, "x": 5, "y": 5},
//!   {"op": "move", "pointer": 1, "x": 50, "y": 40},
//!   {"op": "up", "pointer": 1, "x": 50, "y": 40},
//!   {"op": "undo"}
//! ]
//! ```

use anyhow::Context;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use sketchpad_core::{
    ImageOrigin, PointerEvent, PointerId, PointerResponse, RasterSurface, SketchPad, Tool,
};
use std::path::Path;

/// One host call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Resize {
        width: f64,
        height: f64,
        #[serde(default = "default_scale")]
        scale: f64,
    },
    Tool {
        tool: Tool,
    },
    Down {
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    Move {
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    Up {
        pointer: PointerId,
        x: Option<f64>,
        y: Option<f64>,
    },
    Leave {
        pointer: PointerId,
        x: Option<f64>,
        y: Option<f64>,
    },
    Cancel {
        pointer: PointerId,
        x: Option<f64>,
        y: Option<f64>,
    },
    Clear,
    Undo,
    /// Upload a PNG, resolved relative to the script.
    Image {
        path: String,
        #[serde(default)]
        origin: ImageOrigin,
    },
}

fn default_scale() -> f64 {
    1.0
}

fn end_position(x: Option<f64>, y: Option<f64>) -> Option<Point> {
    Some(Point::new(x?, y?))
}

/// Counts gathered while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Commands applied.
    pub applied: usize,
    /// Commands the pad ignored or rejected.
    pub ignored: usize,
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> anyhow::Result<Vec<Command>> {
    serde_json::from_str(json).context("invalid replay script")
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<Command>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&json)
}

/// Apply commands in order.
///
/// Rejections from the pad (invalid resize, undecodable image, events it
/// ignores) are counted, not fatal. Failing to read an image file is.
pub fn replay<S: RasterSurface>(
    pad: &mut SketchPad<S>,
    commands: &[Command],
    base_dir: &Path,
) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for command in commands {
        let applied = match command {
            Command::Resize {
                width,
                height,
                scale,
            } => pad.on_resize(*width, *height, *scale).is_ok(),
            Command::Tool { tool } => {
                pad.select_tool(*tool);
                true
            }
            Command::Down { pointer, x, y } => {
                pointer_applied(pad.on_pointer_down(*pointer, *x, *y))
            }
            Command::Move { pointer, x, y } => {
                pointer_applied(pad.on_pointer_move(*pointer, *x, *y))
            }
            Command::Up { pointer, x, y } => pointer_applied(pad.handle_pointer(PointerEvent::Up {
                pointer_id: *pointer,
                position: end_position(*x, *y),
            })),
            Command::Leave { pointer, x, y } => {
                pointer_applied(pad.handle_pointer(PointerEvent::Leave {
                    pointer_id: *pointer,
                    position: end_position(*x, *y),
                }))
            }
            Command::Cancel { pointer, x, y } => {
                pointer_applied(pad.handle_pointer(PointerEvent::Cancel {
                    pointer_id: *pointer,
                    position: end_position(*x, *y),
                }))
            }
            Command::Clear => pad.clear(),
            Command::Undo => pad.undo(),
            Command::Image { path, origin } => {
                let full = base_dir.join(path);
                let bytes = std::fs::read(&full)
                    .with_context(|| format!("failed to read image {}", full.display()))?;
                match pad.load_image(&bytes, *origin) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("Image {} not loaded: {}", full.display(), e);
                        false
                    }
                }
            }
        };

        if applied {
            summary.applied += 1;
        } else {
            log::debug!("No effect: {:?}", command);
            summary.ignored += 1;
        }
    }

    let status = pad.status();
    log::info!(
        "Replayed {} commands ({} ignored); has_content={} can_undo={}",
        commands.len(),
        summary.ignored,
        status.has_content,
        status.can_undo
    );
    Ok(summary)
}

fn pointer_applied(response: PointerResponse) -> bool {
    response != PointerResponse::Ignored
}
