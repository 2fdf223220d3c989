use crate::buffer::{map_pixels, zip_pixels, PackedImage, Plane};
use crate::consts::{PACKED_LANE_COUNT, RGB_LANES_MASK};
use crate::error::{MatteError, Result};

/// Pull one 8-bit lane (0 = R, 1 = G, 2 = B, 3 = A) out of a packed image.
pub fn extract_channel(image: &PackedImage, lane: usize) -> Result<Plane> {
    if lane >= PACKED_LANE_COUNT {
        return Err(MatteError::InvalidArgument(format!(
            "lane must be in 0..{PACKED_LANE_COUNT}, got {lane}"
        )));
    }
    let shift = lane * 8;
    Ok(map_pixels(image, |&px| ((px >> shift) & 0xFF) as u8))
}

/// Keep the RGB lanes of `color` and take the alpha lane from `alpha`.
pub fn replace_alpha(color: &PackedImage, alpha: &Plane) -> Result<PackedImage> {
    zip_pixels(color, alpha, |&px, &a| (px & RGB_LANES_MASK) | ((a as u32) << 24))
}
