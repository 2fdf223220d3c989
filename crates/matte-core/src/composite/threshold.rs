use ndarray::Array2;
use num_traits::Zero;

use crate::buffer::{map_pixels, PackedImage, Plane};
use crate::consts::MASK_ON;

/// `min(R² + G² + B², 255)` per pixel; a cheap "is this pixel bright" proxy.
pub fn square_intensity(image: &PackedImage) -> Plane {
    map_pixels(image, |&px| {
        let r = px & 0xFF;
        let g = (px >> 8) & 0xFF;
        let b = (px >> 16) & 0xFF;
        (r * r + g * g + b * b).min(0xFF) as u8
    })
}

/// 255 where `value > threshold`, else 0.
pub fn greater_than(plane: &Plane, threshold: u8) -> Plane {
    map_pixels(plane, |&v| if v > threshold { MASK_ON } else { 0 })
}

/// 255 where `value < threshold`, else 0.
pub fn less_than(plane: &Plane, threshold: u8) -> Plane {
    map_pixels(plane, |&v| if v < threshold { MASK_ON } else { 0 })
}

/// 255 where the sample is non-zero, else 0.
pub fn nonzero_to_mask<T>(buffer: &Array2<T>) -> Plane
where
    T: Zero + Sync,
{
    map_pixels(buffer, |v| if v.is_zero() { 0 } else { MASK_ON })
}
