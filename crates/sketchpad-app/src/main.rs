//! Command-line entry point.

use clap::Parser;
use sketchpad_app::{Replay, ReplayOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sketchpad", version, about = "Replay sketch pad input and export a PNG")]
struct Cli {
    /// JSON script of host calls
    script: PathBuf,

    /// Where to write the exported PNG
    #[arg(short, long, default_value = "sketch.png")]
    output: PathBuf,

    /// JSON pad configuration (stroke style, size limits)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting Sketchpad");

    let cli = Cli::parse();
    let mut replay = Replay::new(ReplayOptions {
        script: cli.script,
        output: cli.output,
        config: cli.config,
    })?;
    let summary = replay.run()?;

    let status = replay.pad().status();
    println!(
        "{} applied, {} ignored, content: {}, undo: {}",
        summary.applied, summary.ignored, status.has_content, status.can_undo
    );
    Ok(())
}
