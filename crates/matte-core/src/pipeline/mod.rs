pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{
    build_mask, isolate_foreground, isolate_foreground_reported, label_regions,
    label_regions_reported,
};
pub use types::{IsolationOutput, NoOpReporter, PipelineStage, ProgressReporter};
