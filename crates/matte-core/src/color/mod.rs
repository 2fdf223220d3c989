pub mod palette;

pub use palette::{generate_palette, hsv_to_rgb24, hue_sector};
