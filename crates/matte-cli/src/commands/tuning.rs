use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use matte_core::labeling::LabelStrategy;
use matte_core::pipeline::config::{IsolationConfig, MaskSource};

/// Isolation parameters shared by the processing commands.
#[derive(Args)]
pub struct TuningArgs {
    /// Isolation config file (TOML); flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brightness threshold for the initial mask (0-255)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Disc radius of the erosion that splits the mask into islands
    #[arg(long)]
    pub island_radius: Option<i32>,

    /// Disc radius of the erosion that trims the final mask edges
    #[arg(long)]
    pub cleanup_radius: Option<i32>,

    /// Use one lane of the input as the mask (0=R, 1=G, 2=B, 3=A)
    #[arg(long)]
    pub channel: Option<usize>,

    /// Label with forward/backward sweeps instead of a flood fill
    #[arg(long)]
    pub relaxation: bool,
}

impl TuningArgs {
    pub fn resolve(&self) -> Result<IsolationConfig> {
        let mut config = if let Some(ref path) = self.config {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid isolation config")?
        } else {
            IsolationConfig::default()
        };

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(radius) = self.island_radius {
            config.island_erosion_radius = radius;
        }
        if let Some(radius) = self.cleanup_radius {
            config.cleanup_erosion_radius = radius;
        }
        if let Some(lane) = self.channel {
            config.mask_source = MaskSource::Channel(lane);
        }
        if self.relaxation {
            config.labeling = LabelStrategy::Relaxation;
        }

        config.validate()?;
        Ok(config)
    }
}
