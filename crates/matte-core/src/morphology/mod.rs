pub mod erode;
pub mod kernel;

pub use erode::erode;
pub use kernel::{build_disc, disc_side, StructuringElement};
