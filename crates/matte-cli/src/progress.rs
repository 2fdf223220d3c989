use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use matte_core::pipeline::{PipelineStage, ProgressReporter};

/// Progress bar advanced once per finished pipeline stage.
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    pub fn new() -> Result<Self> {
        // Isolation runs six stages; labeling alone stops after four.
        let bar = ProgressBar::new(6);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} {msg:20} [{bar:30}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }

    pub fn finish(&self) {
        self.bar.set_length(self.bar.position());
        self.bar.finish_with_message("Done");
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("Failed");
    }
}

impl ProgressReporter for StageProgress {
    fn begin_stage(&self, stage: PipelineStage) {
        self.bar.set_message(stage.to_string());
        self.bar.tick();
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}
