//! Buffer types shared by every operation.
//!
//! All buffers are row-major `Array2` values with shape `(height, width)`.
//! Packed pixels hold four 8-bit lanes: lane 0 = red, 1 = green, 2 = blue,
//! 3 = alpha, with lane `n` at bits `n*8..n*8+8`.

use ndarray::{Array2, Zip};

use crate::consts::{FOREGROUND_BIT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{MatteError, Result};

/// One 32-bit packed RGBA value per pixel.
pub type PackedImage = Array2<u32>;

/// One 8-bit sample per pixel (masks, extracted channels).
pub type Plane = Array2<u8>;

/// One 32-bit label id per pixel; 0 is background.
pub type Labels = Array2<u32>;

/// Wrap a flat row-major buffer as a `(height, width)` array.
pub fn from_raw<T>(width: usize, height: usize, data: Vec<T>) -> Result<Array2<T>> {
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| MatteError::InvalidArgument(format!("{width}x{height} overflows")))?;
    if data.len() != expected {
        return Err(MatteError::DimensionMismatch {
            expected,
            actual: data.len(),
        });
    }
    Array2::from_shape_vec((height, width), data)
        .map_err(|e| MatteError::InvalidArgument(e.to_string()))
}

/// Fail with `DimensionMismatch` unless both buffers have the same shape.
pub fn ensure_same_shape<A, B>(a: &Array2<A>, b: &Array2<B>) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(MatteError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Apply `f` to every element, in parallel for large buffers.
pub(crate) fn map_pixels<A, B, F>(src: &Array2<A>, f: F) -> Array2<B>
where
    A: Sync,
    B: Send,
    F: Fn(&A) -> B + Sync + Send,
{
    if src.len() >= PARALLEL_PIXEL_THRESHOLD {
        Zip::from(src).par_map_collect(f)
    } else {
        src.map(f)
    }
}

/// Combine two same-shaped buffers elementwise, in parallel for large buffers.
pub(crate) fn zip_pixels<A, B, C, F>(a: &Array2<A>, b: &Array2<B>, f: F) -> Result<Array2<C>>
where
    A: Sync,
    B: Sync,
    C: Send,
    F: Fn(&A, &B) -> C + Sync + Send,
{
    ensure_same_shape(a, b)?;
    let zip = Zip::from(a).and(b);
    Ok(if a.len() >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_map_collect(f)
    } else {
        zip.map_collect(f)
    })
}

/// Mask samples with the high bit set (>= 128) are foreground.
#[inline]
pub fn is_foreground(sample: u8) -> bool {
    sample & FOREGROUND_BIT != 0
}
