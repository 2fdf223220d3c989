use crate::buffer::{PackedImage, Plane};
use crate::labeling::LabelMap;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Masking,
    Eroding,
    Labeling,
    Expanding,
    Cleanup,
    Compositing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Masking => write!(f, "Building mask"),
            Self::Eroding => write!(f, "Eroding mask"),
            Self::Labeling => write!(f, "Labeling islands"),
            Self::Expanding => write!(f, "Regrowing labels"),
            Self::Cleanup => write!(f, "Cleaning up edges"),
            Self::Compositing => write!(f, "Replacing alpha"),
        }
    }
}

/// Result of foreground isolation.
#[derive(Clone, Debug)]
pub struct IsolationOutput {
    /// Source colors with the final mask as alpha.
    pub image: PackedImage,
    /// Regrown island labels.
    pub labels: LabelMap,
    /// Final alpha mask after the cleanup erosion.
    pub mask: Plane,
}

/// Progress reporting for the pipeline.
///
/// Implementors can use this to drive spinners, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// Reporter that ignores every event.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
