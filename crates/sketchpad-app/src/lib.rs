//! Sketchpad Application
//!
//! Headless host for the sketch pad: replays recorded host calls against a
//! pixmap-backed pad and writes the exported raster.

mod replay;
mod script;

pub use replay::{Replay, ReplayOptions};
pub use script::{Command, ReplaySummary, load_script, parse_script, replay};
