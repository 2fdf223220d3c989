use matte_core::buffer::{PackedImage, Plane};

/// Parse rows of `#` (foreground) and `.` (background) into a 255/0 mask.
pub fn mask_from_rows(rows: &[&str]) -> Plane {
    let h = rows.len();
    let w = rows[0].len();
    Plane::from_shape_fn((h, w), |(r, c)| {
        if rows[r].as_bytes()[c] == b'#' {
            255
        } else {
            0
        }
    })
}

/// Pack four lanes the way decoded RGBA bytes are packed.
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Deterministic pseudo-random mask with roughly `percent`% foreground.
pub fn scattered_mask(h: usize, w: usize, percent: u32, seed: u32) -> Plane {
    let mut state = seed.max(1);
    Plane::from_shape_fn((h, w), |_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        if state % 100 < percent {
            255
        } else {
            0
        }
    })
}

/// Black opaque image with white opaque rectangles `(top, left, height, width)`.
pub fn image_with_squares(h: usize, w: usize, squares: &[(usize, usize, usize, usize)]) -> PackedImage {
    let mut image = PackedImage::from_elem((h, w), rgba(0, 0, 0, 255));
    for &(top, left, sh, sw) in squares {
        for row in top..top + sh {
            for col in left..left + sw {
                image[[row, col]] = rgba(255, 255, 255, 255);
            }
        }
    }
    image
}
