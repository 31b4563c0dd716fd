//! One replay run: configuration, script, output file.

use anyhow::Context;
use sketchpad_core::SketchConfig;
use sketchpad_render::RasterPad;
use std::path::{Path, PathBuf};

use crate::script::{ReplaySummary, load_script, replay};

/// Inputs of a replay run.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub script: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
}

/// A configured pad ready to replay a script.
pub struct Replay {
    options: ReplayOptions,
    pad: RasterPad,
}

impl Replay {
    pub fn new(options: ReplayOptions) -> anyhow::Result<Self> {
        let config = match &options.config {
            Some(path) => read_config(path)?,
            None => SketchConfig::default(),
        };
        Ok(Self {
            options,
            pad: RasterPad::new(config),
        })
    }

    pub fn pad(&self) -> &RasterPad {
        &self.pad
    }

    /// Replay the script and write the exported PNG.
    pub fn run(&mut self) -> anyhow::Result<ReplaySummary> {
        let commands = load_script(&self.options.script)?;
        let base_dir = self
            .options
            .script
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let summary = replay(&mut self.pad, &commands, &base_dir)?;

        let png = self
            .pad
            .export_raster()
            .context("failed to export the sketch")?;
        std::fs::write(&self.options.output, &png)
            .with_context(|| format!("failed to write {}", self.options.output.display()))?;
        log::info!(
            "Wrote {} ({} bytes)",
            self.options.output.display(),
            png.len()
        );

        Ok(summary)
    }
}

fn read_config(path: &Path) -> anyhow::Result<SketchConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = SketchConfig::from_json(&json)
        .with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}
