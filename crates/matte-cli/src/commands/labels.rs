use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use matte_core::composite::visualize_labels;
use matte_core::io::image_io::{load_rgba, save_rgba};
use matte_core::pipeline::label_regions_reported;

use super::tuning::TuningArgs;
use crate::progress::StageProgress;
use crate::summary::{print_components, print_isolation_summary};

#[derive(Args)]
pub struct LabelsArgs {
    /// Input image (PNG, JPEG, TIFF, ...)
    pub file: PathBuf,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Output file path
    #[arg(short, long, default_value = "labels.png")]
    pub output: PathBuf,
}

pub fn run(args: &LabelsArgs) -> Result<()> {
    let config = args.tuning.resolve()?;
    let image = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_isolation_summary(&args.file, &args.output, image.dim(), &config);

    let progress = StageProgress::new()?;
    let labels = label_regions_reported(&image, &config, &progress)
        .inspect_err(|_| progress.abandon())?;
    progress.finish();

    print_components(&labels);

    let rendered = visualize_labels(&labels)?;
    save_rgba(&rendered, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Labels saved to {}", args.output.display());

    Ok(())
}
