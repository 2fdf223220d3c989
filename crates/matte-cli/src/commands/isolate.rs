use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use matte_core::io::image_io::{load_rgba, save_plane, save_rgba};
use matte_core::pipeline::isolate_foreground_reported;

use super::tuning::TuningArgs;
use crate::progress::StageProgress;
use crate::summary::{print_components, print_isolation_summary};

#[derive(Args)]
pub struct IsolateArgs {
    /// Input image (PNG, JPEG, TIFF, ...)
    pub file: PathBuf,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Also write the final alpha mask as a grayscale PNG
    #[arg(long)]
    pub mask_out: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "isolated.png")]
    pub output: PathBuf,
}

pub fn run(args: &IsolateArgs) -> Result<()> {
    let config = args.tuning.resolve()?;
    let image = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_isolation_summary(&args.file, &args.output, image.dim(), &config);

    let progress = StageProgress::new()?;
    let result = isolate_foreground_reported(&image, &config, &progress)
        .inspect_err(|_| progress.abandon())?;
    progress.finish();

    print_components(&result.labels);

    save_rgba(&result.image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    if let Some(ref mask_path) = args.mask_out {
        save_plane(&result.mask, mask_path)
            .with_context(|| format!("Failed to write {}", mask_path.display()))?;
        println!("Mask saved to {}", mask_path.display());
    }
    println!("Output saved to {}", args.output.display());

    Ok(())
}
