use tracing::{debug, info};

use crate::buffer::{PackedImage, Plane};
use crate::composite::{
    extract_channel, greater_than, nonzero_to_mask, replace_alpha, square_intensity,
};
use crate::error::Result;
use crate::labeling::{expand_labels_in_place, label_components_with, LabelMap};
use crate::morphology::{build_disc, disc_side, erode};

use super::config::{IsolationConfig, MaskSource};
use super::types::{IsolationOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// Build the initial 8-bit foreground mask from a packed image.
pub fn build_mask(image: &PackedImage, config: &IsolationConfig) -> Result<Plane> {
    match config.mask_source {
        MaskSource::Brightness => Ok(greater_than(
            &square_intensity(image),
            config.threshold_u8()?,
        )),
        MaskSource::Channel(lane) => extract_channel(image, lane),
    }
}

/// Label the islands of `image`'s mask and regrow them to the mask's extent.
pub fn label_regions(image: &PackedImage, config: &IsolationConfig) -> Result<LabelMap> {
    label_regions_reported(image, config, &NoOpReporter)
}

/// [`label_regions`] with progress reporting.
pub fn label_regions_reported(
    image: &PackedImage,
    config: &IsolationConfig,
    reporter: &dyn ProgressReporter,
) -> Result<LabelMap> {
    config.validate()?;
    let mask = run_stage(reporter, PipelineStage::Masking, || build_mask(image, config))?;
    grow_islands(&mask, config, reporter)
}

/// Cut the foreground out of `image`: its alpha becomes the regrown, edge
/// trimmed island mask.
pub fn isolate_foreground(image: &PackedImage, config: &IsolationConfig) -> Result<IsolationOutput> {
    isolate_foreground_reported(image, config, &NoOpReporter)
}

/// [`isolate_foreground`] with progress reporting.
pub fn isolate_foreground_reported(
    image: &PackedImage,
    config: &IsolationConfig,
    reporter: &dyn ProgressReporter,
) -> Result<IsolationOutput> {
    config.validate()?;
    let (h, w) = image.dim();
    info!(width = w, height = h, "Isolating foreground");

    let mask = run_stage(reporter, PipelineStage::Masking, || build_mask(image, config))?;
    let labels = grow_islands(&mask, config, reporter)?;

    let final_mask = run_stage(reporter, PipelineStage::Cleanup, || {
        erode_disc(&nonzero_to_mask(&labels.labels), config.cleanup_erosion_radius)
    })?;

    let composed = run_stage(reporter, PipelineStage::Compositing, || {
        replace_alpha(image, &final_mask)
    })?;
    info!(islands = labels.count, "Foreground isolated");

    Ok(IsolationOutput {
        image: composed,
        labels,
        mask: final_mask,
    })
}

/// Erode `mask`, label what survives, then regrow the labels into `mask`.
fn grow_islands(
    mask: &Plane,
    config: &IsolationConfig,
    reporter: &dyn ProgressReporter,
) -> Result<LabelMap> {
    let eroded = run_stage(reporter, PipelineStage::Eroding, || {
        erode_disc(mask, config.island_erosion_radius)
    })?;

    let mut map = run_stage(reporter, PipelineStage::Labeling, || {
        label_components_with(&eroded, config.labeling)
    })?;
    info!(islands = map.count, strategy = %config.labeling, "Islands labeled");

    run_stage(reporter, PipelineStage::Expanding, || {
        expand_labels_in_place(mask, &mut map.labels)
    })?;

    Ok(map)
}

/// Erode `mask` with a disc of `radius`.
///
/// A disc wider or taller than the mask fits nowhere, so the result is all
/// zeros and the kernel is never built.
fn erode_disc(mask: &Plane, radius: i32) -> Result<Plane> {
    let (h, w) = mask.dim();
    if radius >= 0 && disc_side(radius).map_or(true, |side| side > h || side > w) {
        debug!(radius, h, w, "Disc larger than mask, skipping erosion");
        return Ok(Plane::zeros((h, w)));
    }
    let kernel = build_disc(radius)?;
    Ok(erode(mask, &kernel))
}

/// Run one stage between reporter callbacks. The stage is closed even when
/// it fails.
fn run_stage<T, F>(reporter: &dyn ProgressReporter, stage: PipelineStage, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    reporter.begin_stage(stage);
    let out = f();
    reporter.finish_stage();
    out
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::MatteError;

    #[derive(Default)]
    struct Events(RefCell<Vec<&'static str>>);

    impl ProgressReporter for Events {
        fn begin_stage(&self, _stage: PipelineStage) {
            self.0.borrow_mut().push("begin");
        }

        fn finish_stage(&self) {
            self.0.borrow_mut().push("finish");
        }
    }

    #[test]
    fn failed_stage_is_still_finished() {
        let events = Events::default();
        let result: Result<()> = run_stage(&events, PipelineStage::Labeling, || {
            Err(MatteError::LabelOverflow { limit: 1 })
        });
        assert!(matches!(result, Err(MatteError::LabelOverflow { .. })));
        assert_eq!(*events.0.borrow(), vec!["begin", "finish"]);
    }

    #[test]
    fn oversized_disc_clears_without_building_kernel() {
        let mask = Plane::from_elem((4, 4), 255);
        for radius in [2, 100_000, i32::MAX] {
            let eroded = erode_disc(&mask, radius).unwrap();
            assert_eq!(eroded.dim(), (4, 4));
            assert!(eroded.iter().all(|&v| v == 0), "radius {radius}");
        }
    }

    #[test]
    fn fitting_disc_still_erodes() {
        let mask = Plane::from_elem((5, 5), 255);
        let eroded = erode_disc(&mask, 1).unwrap();
        assert_eq!(eroded[[2, 2]], 255);
        assert_eq!(eroded[[0, 0]], 0);
    }

    #[test]
    fn negative_disc_radius_is_rejected() {
        let mask = Plane::from_elem((5, 5), 255);
        let err = erode_disc(&mask, -1).unwrap_err();
        assert!(matches!(err, MatteError::InvalidArgument(_)));
    }
}
