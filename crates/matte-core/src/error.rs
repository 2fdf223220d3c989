use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Buffer dimensions mismatch (expected {expected} samples, got {actual})")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Label count exceeds the label id limit ({limit})")]
    LabelOverflow { limit: u64 },

    #[error("Relaxation did not converge within {passes} passes")]
    NonTermination { passes: usize },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MatteError>;
