pub mod channel;
pub mod threshold;
pub mod visualize;

pub use channel::{extract_channel, replace_alpha};
pub use threshold::{greater_than, less_than, nonzero_to_mask, square_intensity};
pub use visualize::{visualize, visualize_labels};
