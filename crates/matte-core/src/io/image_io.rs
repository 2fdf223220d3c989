use std::path::Path;

use image::{GrayImage, ImageFormat, RgbaImage};

use crate::buffer::{from_raw, PackedImage, Plane};
use crate::error::{MatteError, Result};

/// Load any image the `image` crate can decode as a packed RGBA buffer.
///
/// An alpha lane is added (opaque) when the source has none. Lanes are
/// packed little-endian, so lane 0 is red.
pub fn load_rgba(path: &Path) -> Result<PackedImage> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let data: Vec<u32> = rgba.pixels().map(|px| u32::from_le_bytes(px.0)).collect();
    from_raw(w as usize, h as usize, data)
}

/// Unpack a packed buffer into an `RgbaImage`.
pub fn to_rgba_image(image: &PackedImage) -> Result<RgbaImage> {
    let (h, w) = image.dim();
    let bytes: Vec<u8> = image.iter().flat_map(|px| px.to_le_bytes()).collect();
    RgbaImage::from_raw(w as u32, h as u32, bytes).ok_or(MatteError::DimensionMismatch {
        expected: w * h,
        actual: image.len(),
    })
}

/// Save a packed buffer as RGBA, choosing the format from the extension
/// (PNG when there is none).
pub fn save_rgba(image: &PackedImage, path: &Path) -> Result<()> {
    let img = to_rgba_image(image)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") | None => img.save_with_format(path, ImageFormat::Png)?,
        _ => img.save(path)?,
    }
    Ok(())
}

/// Save an 8-bit plane (mask, extracted channel) as grayscale PNG.
pub fn save_plane(plane: &Plane, path: &Path) -> Result<()> {
    let (h, w) = plane.dim();
    let img = GrayImage::from_raw(w as u32, h as u32, plane.iter().copied().collect()).ok_or(
        MatteError::DimensionMismatch {
            expected: w * h,
            actual: plane.len(),
        },
    )?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
